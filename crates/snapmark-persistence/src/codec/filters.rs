//! Codecs for filter containers.
//!
//! Both kinds carry their prepared filter twice: once as a field and once in
//! the DTO itself. The field is authoritative; the payload only fills it in
//! when the persisted fields lack it.

use snapmark_model::{
    Bounds, ContainerKind, Drawable, FieldKind, HighlightContainer, ObfuscateContainer,
    PreparedFilter,
};

use super::field::{backfill_defaults, decode_fields, encode_fields, restore_payload_field};
use super::{DecodeContext, DecodeDto, EncodeContext, EncodeDto};
use crate::error::Result;
use crate::types::{HighlightContainerDto, ObfuscateContainerDto};

impl EncodeDto for HighlightContainer {
    type Dto = HighlightContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(HighlightContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            prepared_filter: self.prepared_filter().into(),
        })
    }
}

impl DecodeDto for HighlightContainer {
    type Dto = HighlightContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let mut fields = decode_fields(dto.fields, ctx)?;

        if !fields.contains(FieldKind::PreparedFilterHighlight) {
            restore_payload_field(
                &mut fields,
                ContainerKind::Highlight,
                FieldKind::PreparedFilterHighlight,
                PreparedFilter::from(dto.prepared_filter),
            );
        }
        backfill_defaults(ContainerKind::Highlight, &mut fields, ctx);

        Ok(HighlightContainer::from_parts(bounds, fields))
    }
}

impl EncodeDto for ObfuscateContainer {
    type Dto = ObfuscateContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(ObfuscateContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            prepared_filter: self.prepared_filter().into(),
        })
    }
}

impl DecodeDto for ObfuscateContainer {
    type Dto = ObfuscateContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let mut fields = decode_fields(dto.fields, ctx)?;

        if !fields.contains(FieldKind::PreparedFilterObfuscate) {
            restore_payload_field(
                &mut fields,
                ContainerKind::Obfuscate,
                FieldKind::PreparedFilterObfuscate,
                PreparedFilter::from(dto.prepared_filter),
            );
        }
        backfill_defaults(ContainerKind::Obfuscate, &mut fields, ctx);

        Ok(ObfuscateContainer::from_parts(bounds, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::DigestAssetCodec;
    use crate::options::CodecOptions;
    use crate::registry::VersionRegistry;
    use crate::types::PreparedFilterDto;
    use snapmark_model::FieldValue;

    #[test]
    fn test_highlight_filter_round_trip() {
        let assets = DigestAssetCodec::new();
        let registry = VersionRegistry::builtin();
        let options = CodecOptions::default();

        let mut highlight = HighlightContainer::new(Bounds::new(4, 4, 40, 12));
        highlight.set_prepared_filter(PreparedFilter::Grayscale);

        let dto = highlight.encode_dto(&EncodeContext::new(&assets)).unwrap();
        assert_eq!(dto.prepared_filter, PreparedFilterDto::Grayscale);

        let ctx = DecodeContext::new(&registry, &assets, &options, 2);
        let decoded = HighlightContainer::decode_dto(dto, &ctx).unwrap();
        assert_eq!(decoded.bounds(), highlight.bounds());
        assert_eq!(decoded.prepared_filter(), PreparedFilter::Grayscale);
        assert!(decoded.fields().same_values(highlight.fields()));
    }

    #[test]
    fn test_obfuscate_payload_used_for_old_documents() {
        let assets = DigestAssetCodec::new();
        let registry = VersionRegistry::builtin();
        let options = CodecOptions::default();
        let ctx = DecodeContext::new(&registry, &assets, &options, 1);

        let dto = ObfuscateContainerDto {
            left: 0,
            top: 0,
            width: 8,
            height: 8,
            fields: Vec::new(),
            prepared_filter: PreparedFilterDto::Blur,
        };

        let decoded = ObfuscateContainer::decode_dto(dto, &ctx).unwrap();
        assert_eq!(decoded.prepared_filter(), PreparedFilter::Blur);
        assert_eq!(
            decoded.fields().value(FieldKind::PreviewQuality),
            Some(&FieldValue::F32(1.0))
        );
    }
}
