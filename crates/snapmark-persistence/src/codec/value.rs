//! Field value codec.

use std::any::Any;

use snapmark_model::{
    ArrowHeadCombination, Color, Decimal, FieldFlags, FieldValue, PreparedFilter, TextAlignment,
};

use crate::error::{CodecError, Result};
use crate::types::{
    ArrowHeadCombinationDto, DecimalDto, FieldValueDto, PreparedFilterDto, TextAlignmentDto,
};

/// Encode a field value.
///
/// Colors keep only their ARGB value; a color name does not survive.
pub fn encode_value(value: &FieldValue) -> FieldValueDto {
    match value {
        FieldValue::Int(v) => FieldValueDto::Int(*v),
        FieldValue::Str(v) => FieldValueDto::Str(v.clone()),
        FieldValue::Bool(v) => FieldValueDto::Bool(*v),
        FieldValue::F32(v) => FieldValueDto::F32(*v),
        FieldValue::F64(v) => FieldValueDto::F64(*v),
        FieldValue::Decimal(v) => {
            FieldValueDto::Decimal(DecimalDto::from_mantissa(v.mantissa(), v.scale()))
        }
        FieldValue::Color(v) => FieldValueDto::Color { argb: v.argb() },
        FieldValue::ArrowHeads(v) => FieldValueDto::ArrowHeadCombination((*v).into()),
        FieldValue::PreparedFilter(v) => FieldValueDto::PreparedFilter((*v).into()),
        FieldValue::TextAlignment(v) => FieldValueDto::TextAlignment((*v).into()),
        FieldValue::Flags(v) => FieldValueDto::FieldFlag { bits: v.bits() },
        FieldValue::Null => FieldValueDto::Null,
    }
}

/// Encode a boxed editor value.
///
/// Fails with [`CodecError::TypeMismatch`] if the value's type is not one of
/// the supported field value types; nothing is coerced to a string.
pub fn encode_dyn_value(value: &dyn Any) -> Result<FieldValueDto> {
    let value = FieldValue::from_dyn(value)?;
    Ok(encode_value(&value))
}

/// Decode a field value.
pub fn decode_value(dto: FieldValueDto) -> Result<FieldValue> {
    let value = match dto {
        FieldValueDto::Int(v) => FieldValue::Int(v),
        FieldValueDto::Str(v) => FieldValue::Str(v),
        FieldValueDto::Bool(v) => FieldValue::Bool(v),
        FieldValueDto::F32(v) => FieldValue::F32(v),
        FieldValueDto::F64(v) => FieldValue::F64(v),
        FieldValueDto::Decimal(v) => {
            let decimal = Decimal::new(v.mantissa(), v.scale).ok_or_else(|| {
                CodecError::InvalidValue {
                    field: "decimal".to_string(),
                    reason: format!("scale {} is out of range", v.scale),
                }
            })?;
            FieldValue::Decimal(decimal)
        }
        FieldValueDto::Color { argb } => FieldValue::Color(Color::from_argb(argb)),
        FieldValueDto::ArrowHeadCombination(v) => FieldValue::ArrowHeads(v.into()),
        FieldValueDto::PreparedFilter(v) => FieldValue::PreparedFilter(v.into()),
        FieldValueDto::TextAlignment(v) => FieldValue::TextAlignment(v.into()),
        FieldValueDto::FieldFlag { bits } => FieldValue::Flags(FieldFlags::from_bits(bits)),
        FieldValueDto::Null => FieldValue::Null,
    };
    Ok(value)
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

impl From<ArrowHeadCombination> for ArrowHeadCombinationDto {
    fn from(value: ArrowHeadCombination) -> Self {
        match value {
            ArrowHeadCombination::None => ArrowHeadCombinationDto::None,
            ArrowHeadCombination::StartPoint => ArrowHeadCombinationDto::StartPoint,
            ArrowHeadCombination::EndPoint => ArrowHeadCombinationDto::EndPoint,
            ArrowHeadCombination::Both => ArrowHeadCombinationDto::Both,
        }
    }
}

impl From<ArrowHeadCombinationDto> for ArrowHeadCombination {
    fn from(dto: ArrowHeadCombinationDto) -> Self {
        match dto {
            ArrowHeadCombinationDto::None => ArrowHeadCombination::None,
            ArrowHeadCombinationDto::StartPoint => ArrowHeadCombination::StartPoint,
            ArrowHeadCombinationDto::EndPoint => ArrowHeadCombination::EndPoint,
            ArrowHeadCombinationDto::Both => ArrowHeadCombination::Both,
        }
    }
}

impl From<PreparedFilter> for PreparedFilterDto {
    fn from(value: PreparedFilter) -> Self {
        match value {
            PreparedFilter::Blur => PreparedFilterDto::Blur,
            PreparedFilter::Pixelize => PreparedFilterDto::Pixelize,
            PreparedFilter::TextHighlight => PreparedFilterDto::TextHighlight,
            PreparedFilter::AreaHighlight => PreparedFilterDto::AreaHighlight,
            PreparedFilter::Grayscale => PreparedFilterDto::Grayscale,
            PreparedFilter::Magnification => PreparedFilterDto::Magnification,
        }
    }
}

impl From<PreparedFilterDto> for PreparedFilter {
    fn from(dto: PreparedFilterDto) -> Self {
        match dto {
            PreparedFilterDto::Blur => PreparedFilter::Blur,
            PreparedFilterDto::Pixelize => PreparedFilter::Pixelize,
            PreparedFilterDto::TextHighlight => PreparedFilter::TextHighlight,
            PreparedFilterDto::AreaHighlight => PreparedFilter::AreaHighlight,
            PreparedFilterDto::Grayscale => PreparedFilter::Grayscale,
            PreparedFilterDto::Magnification => PreparedFilter::Magnification,
        }
    }
}

impl From<TextAlignment> for TextAlignmentDto {
    fn from(value: TextAlignment) -> Self {
        match value {
            TextAlignment::Near => TextAlignmentDto::Near,
            TextAlignment::Center => TextAlignmentDto::Center,
            TextAlignment::Far => TextAlignmentDto::Far,
        }
    }
}

impl From<TextAlignmentDto> for TextAlignment {
    fn from(dto: TextAlignmentDto) -> Self {
        match dto {
            TextAlignmentDto::Near => TextAlignment::Near,
            TextAlignmentDto::Center => TextAlignment::Center,
            TextAlignmentDto::Far => TextAlignment::Far,
        }
    }
}
