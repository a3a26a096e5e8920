//! Field and field value DTOs.

use rkyv::{Archive, Deserialize, Serialize};

/// A persisted field.
///
/// The kind is stored by symbolic name so reordering or inserting field
/// kinds never changes what an older file means.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct FieldDto {
    /// Symbolic field kind name (e.g., "LINE_THICKNESS").
    pub field_kind_name: String,

    /// Scope the field belongs to (e.g., "LineContainer").
    pub scope: String,

    pub value: FieldValueDto,
}

/// A persisted field value. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum FieldValueDto {
    Int(i32),
    Str(String),
    Bool(bool),
    F32(f32),
    F64(f64),
    Decimal(DecimalDto),
    /// Packed ARGB only; color names are not persisted.
    Color {
        argb: u32,
    },
    ArrowHeadCombination(ArrowHeadCombinationDto),
    PreparedFilter(PreparedFilterDto),
    TextAlignment(TextAlignmentDto),
    FieldFlag {
        bits: u32,
    },
    /// The field is present and explicitly set to nothing.
    Null,
}

/// Exact decimal, split into two 64-bit halves of the 128-bit mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct DecimalDto {
    pub mantissa_lo: u64,
    pub mantissa_hi: i64,
    pub scale: u32,
}

impl DecimalDto {
    pub fn from_mantissa(mantissa: i128, scale: u32) -> Self {
        Self {
            mantissa_lo: mantissa as u64,
            mantissa_hi: (mantissa >> 64) as i64,
            scale,
        }
    }

    pub fn mantissa(&self) -> i128 {
        (i128::from(self.mantissa_hi) << 64) | i128::from(self.mantissa_lo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum ArrowHeadCombinationDto {
    None,
    StartPoint,
    EndPoint,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum PreparedFilterDto {
    Blur,
    Pixelize,
    TextHighlight,
    AreaHighlight,
    Grayscale,
    Magnification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub enum TextAlignmentDto {
    Near,
    Center,
    Far,
}

/// A persisted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct PointDto {
    pub x: i32,
    pub y: i32,
}
