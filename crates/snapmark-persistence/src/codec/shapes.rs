//! Codecs for line-based shapes.

use snapmark_model::{
    ArrowContainer, ArrowHeadCombination, Bounds, ContainerKind, Drawable, EllipseContainer,
    FieldKind, FreehandContainer, LineContainer, Point, RectangleContainer,
};

use super::field::{
    backfill_defaults, decode_field_set, decode_fields, encode_fields, restore_payload_field,
};
use super::{DecodeContext, DecodeDto, EncodeContext, EncodeDto};
use crate::error::Result;
use crate::types::{
    ArrowContainerDto, EllipseContainerDto, FreehandContainerDto, LineContainerDto, PointDto,
    RectangleContainerDto,
};

/// Codecs for kinds that persist nothing beyond bounds and fields.
macro_rules! plain_container_codec {
    ($ty:ident, $dto:ident) => {
        impl EncodeDto for $ty {
            type Dto = $dto;

            fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
                let bounds = self.bounds();
                Ok($dto {
                    left: bounds.left,
                    top: bounds.top,
                    width: bounds.width,
                    height: bounds.height,
                    fields: encode_fields(self.fields()),
                })
            }
        }

        impl DecodeDto for $ty {
            type Dto = $dto;

            fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
                let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
                let fields = decode_field_set(<$ty as Drawable>::KIND, dto.fields, ctx)?;
                Ok($ty::from_parts(bounds, fields))
            }
        }
    };
}

plain_container_codec!(LineContainer, LineContainerDto);
plain_container_codec!(RectangleContainer, RectangleContainerDto);
plain_container_codec!(EllipseContainer, EllipseContainerDto);

impl EncodeDto for ArrowContainer {
    type Dto = ArrowContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(ArrowContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            arrow_heads: self.arrow_heads().into(),
        })
    }
}

impl DecodeDto for ArrowContainer {
    type Dto = ArrowContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let mut fields = decode_fields(dto.fields, ctx)?;

        // A persisted ARROWHEADS field wins over the mirrored payload.
        if !fields.contains(FieldKind::ArrowHeads) {
            restore_payload_field(
                &mut fields,
                ContainerKind::Arrow,
                FieldKind::ArrowHeads,
                ArrowHeadCombination::from(dto.arrow_heads),
            );
        }
        backfill_defaults(ContainerKind::Arrow, &mut fields, ctx);

        Ok(ArrowContainer::from_parts(bounds, fields))
    }
}

impl EncodeDto for FreehandContainer {
    type Dto = FreehandContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(FreehandContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            capture_points: self.points().iter().copied().map(PointDto::from).collect(),
        })
    }
}

impl DecodeDto for FreehandContainer {
    type Dto = FreehandContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let fields = decode_field_set(ContainerKind::Freehand, dto.fields, ctx)?;
        let points = dto.capture_points.into_iter().map(Point::from).collect();
        Ok(FreehandContainer::from_parts(bounds, fields, points))
    }
}

impl From<Point> for PointDto {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<PointDto> for Point {
    fn from(dto: PointDto) -> Self {
        Point::new(dto.x, dto.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::DigestAssetCodec;
    use crate::options::CodecOptions;
    use crate::registry::VersionRegistry;
    use crate::types::ArrowHeadCombinationDto;
    use snapmark_model::{Color, FieldValue};

    #[test]
    fn test_line_keeps_bounds_and_overrides() {
        let assets = DigestAssetCodec::new();
        let registry = VersionRegistry::builtin();
        let options = CodecOptions::default();

        let mut line = LineContainer::new(Bounds::new(-5, 7, -30, 12));
        line.set_field(FieldKind::LineColor, Color::BLUE);

        let dto = line.encode_dto(&EncodeContext::new(&assets)).unwrap();
        assert_eq!((dto.left, dto.top, dto.width, dto.height), (-5, 7, -30, 12));

        let ctx = DecodeContext::new(&registry, &assets, &options, 2);
        let decoded = LineContainer::decode_dto(dto, &ctx).unwrap();
        assert_eq!(decoded.bounds(), line.bounds());
        assert!(decoded.fields().same_values(line.fields()));
    }

    #[test]
    fn test_arrow_payload_fills_missing_field() {
        let assets = DigestAssetCodec::new();
        let registry = VersionRegistry::builtin();
        let options = CodecOptions::default();
        let ctx = DecodeContext::new(&registry, &assets, &options, 2);

        let dto = ArrowContainerDto {
            left: 0,
            top: 0,
            width: 10,
            height: 10,
            fields: Vec::new(),
            arrow_heads: ArrowHeadCombinationDto::Both,
        };

        let arrow = ArrowContainer::decode_dto(dto, &ctx).unwrap();
        assert_eq!(arrow.arrow_heads(), ArrowHeadCombination::Both);
        assert_eq!(
            arrow.fields().get(FieldKind::ArrowHeads).map(|f| f.scope.as_str()),
            Some("ArrowContainer")
        );
    }

    #[test]
    fn test_arrow_field_wins_over_payload() {
        let assets = DigestAssetCodec::new();
        let registry = VersionRegistry::builtin();
        let options = CodecOptions::default();

        let mut arrow = ArrowContainer::new(Bounds::new(1, 2, 3, 4));
        arrow.set_arrow_heads(ArrowHeadCombination::StartPoint);

        let mut dto = arrow.encode_dto(&EncodeContext::new(&assets)).unwrap();
        dto.arrow_heads = ArrowHeadCombinationDto::None;

        let ctx = DecodeContext::new(&registry, &assets, &options, 2);
        let decoded = ArrowContainer::decode_dto(dto, &ctx).unwrap();
        assert_eq!(
            decoded.fields().value(FieldKind::ArrowHeads),
            Some(&FieldValue::ArrowHeads(ArrowHeadCombination::StartPoint))
        );
    }
}
