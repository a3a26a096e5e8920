//! Codecs for containers that embed graphics, plus the asset helpers the
//! document codec shares.

use snapmark_model::{
    Asset, AssetKind, Bounds, ContainerKind, Drawable, EmojiContainer, ImageContainer,
    MetafileContainer, SvgContainer,
};

use super::field::{decode_field_set, encode_fields};
use super::{DecodeContext, DecodeDto, EncodeContext, EncodeDto};
use crate::asset::AssetError;
use crate::error::{CodecError, Result};
use crate::types::{EmojiContainerDto, ImageContainerDto, MetafileContainerDto, SvgContainerDto};

/// Encode an embedded asset through the asset codec.
///
/// `owner` names what embeds the asset and ends up in the error.
pub(super) fn encode_asset(
    owner: &'static str,
    asset: &Asset,
    ctx: &EncodeContext<'_>,
) -> Result<Vec<u8>> {
    if asset.is_empty() {
        return Err(CodecError::Asset {
            owner,
            source: AssetError::Empty {
                kind: asset.kind().as_str(),
            },
        });
    }

    ctx.assets
        .encode(asset)
        .map_err(|source| CodecError::Asset { owner, source })
}

/// Decode an embedded asset through the asset codec.
pub(super) fn decode_asset(
    owner: &'static str,
    kind: AssetKind,
    bytes: &[u8],
    ctx: &DecodeContext<'_>,
) -> Result<Asset> {
    if bytes.is_empty() {
        return Err(CodecError::Asset {
            owner,
            source: AssetError::Empty {
                kind: kind.as_str(),
            },
        });
    }

    ctx.assets
        .decode(kind, bytes)
        .map_err(|source| CodecError::Asset { owner, source })
}

impl EncodeDto for ImageContainer {
    type Dto = ImageContainerDto;

    fn encode_dto(&self, ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(ImageContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            image: encode_asset("image container", self.image(), ctx)?,
        })
    }
}

impl DecodeDto for ImageContainer {
    type Dto = ImageContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let image = decode_asset("image container", AssetKind::Raster, &dto.image, ctx)?;
        let fields = decode_field_set(ContainerKind::Image, dto.fields, ctx)?;
        Ok(ImageContainer::from_parts(bounds, fields, image))
    }
}

impl EncodeDto for MetafileContainer {
    type Dto = MetafileContainerDto;

    fn encode_dto(&self, ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(MetafileContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            metafile: encode_asset("metafile container", self.metafile(), ctx)?,
        })
    }
}

impl DecodeDto for MetafileContainer {
    type Dto = MetafileContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let metafile =
            decode_asset("metafile container", AssetKind::Metafile, &dto.metafile, ctx)?;
        let fields = decode_field_set(ContainerKind::Metafile, dto.fields, ctx)?;
        Ok(MetafileContainer::from_parts(bounds, fields, metafile))
    }
}

impl EncodeDto for SvgContainer {
    type Dto = SvgContainerDto;

    fn encode_dto(&self, ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(SvgContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            svg: encode_asset("svg container", self.svg(), ctx)?,
        })
    }
}

impl DecodeDto for SvgContainer {
    type Dto = SvgContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let svg = decode_asset("svg container", AssetKind::Svg, &dto.svg, ctx)?;
        let fields = decode_field_set(ContainerKind::Svg, dto.fields, ctx)?;
        Ok(SvgContainer::from_parts(bounds, fields, svg))
    }
}

impl EncodeDto for EmojiContainer {
    type Dto = EmojiContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(EmojiContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            emoji: self.emoji().to_string(),
            rotation_angle: self.rotation_angle(),
        })
    }
}

impl DecodeDto for EmojiContainer {
    type Dto = EmojiContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let fields = decode_field_set(ContainerKind::Emoji, dto.fields, ctx)?;
        Ok(EmojiContainer::from_parts(
            bounds,
            fields,
            dto.emoji,
            dto.rotation_angle,
        ))
    }
}
