//! Container dispatch.
//!
//! Both directions match exhaustively, so a container kind without a codec
//! does not compile.

use snapmark_model::{
    ArrowContainer, Container, EllipseContainer, EmojiContainer, FreehandContainer,
    HighlightContainer, ImageContainer, LineContainer, MetafileContainer, ObfuscateContainer,
    RectangleContainer, SpeechbubbleContainer, StepLabelContainer, SvgContainer, TextContainer,
};

use super::{DecodeContext, DecodeDto, EncodeContext, EncodeDto};
use crate::error::Result;
use crate::types::ContainerDto;

/// Encode any container into its kind's DTO.
pub fn encode_container(container: &Container, ctx: &EncodeContext<'_>) -> Result<ContainerDto> {
    let dto = match container {
        Container::Line(c) => ContainerDto::Line(c.encode_dto(ctx)?),
        Container::Rectangle(c) => ContainerDto::Rectangle(c.encode_dto(ctx)?),
        Container::Ellipse(c) => ContainerDto::Ellipse(c.encode_dto(ctx)?),
        Container::Arrow(c) => ContainerDto::Arrow(c.encode_dto(ctx)?),
        Container::Freehand(c) => ContainerDto::Freehand(c.encode_dto(ctx)?),
        Container::Highlight(c) => ContainerDto::Highlight(c.encode_dto(ctx)?),
        Container::Obfuscate(c) => ContainerDto::Obfuscate(c.encode_dto(ctx)?),
        Container::Speechbubble(c) => ContainerDto::Speechbubble(c.encode_dto(ctx)?),
        Container::StepLabel(c) => ContainerDto::StepLabel(c.encode_dto(ctx)?),
        Container::Text(c) => ContainerDto::Text(c.encode_dto(ctx)?),
        Container::Image(c) => ContainerDto::Image(c.encode_dto(ctx)?),
        Container::Metafile(c) => ContainerDto::Metafile(c.encode_dto(ctx)?),
        Container::Svg(c) => ContainerDto::Svg(c.encode_dto(ctx)?),
        Container::Emoji(c) => ContainerDto::Emoji(c.encode_dto(ctx)?),
    };
    Ok(dto)
}

/// Decode a DTO into the container kind it names.
pub fn decode_container(dto: ContainerDto, ctx: &DecodeContext<'_>) -> Result<Container> {
    let container = match dto {
        ContainerDto::Line(d) => Container::Line(LineContainer::decode_dto(d, ctx)?),
        ContainerDto::Rectangle(d) => Container::Rectangle(RectangleContainer::decode_dto(d, ctx)?),
        ContainerDto::Ellipse(d) => Container::Ellipse(EllipseContainer::decode_dto(d, ctx)?),
        ContainerDto::Arrow(d) => Container::Arrow(ArrowContainer::decode_dto(d, ctx)?),
        ContainerDto::Freehand(d) => Container::Freehand(FreehandContainer::decode_dto(d, ctx)?),
        ContainerDto::Highlight(d) => Container::Highlight(HighlightContainer::decode_dto(d, ctx)?),
        ContainerDto::Obfuscate(d) => Container::Obfuscate(ObfuscateContainer::decode_dto(d, ctx)?),
        ContainerDto::Speechbubble(d) => {
            Container::Speechbubble(SpeechbubbleContainer::decode_dto(d, ctx)?)
        }
        ContainerDto::StepLabel(d) => Container::StepLabel(StepLabelContainer::decode_dto(d, ctx)?),
        ContainerDto::Text(d) => Container::Text(TextContainer::decode_dto(d, ctx)?),
        ContainerDto::Image(d) => Container::Image(ImageContainer::decode_dto(d, ctx)?),
        ContainerDto::Metafile(d) => Container::Metafile(MetafileContainer::decode_dto(d, ctx)?),
        ContainerDto::Svg(d) => Container::Svg(SvgContainer::decode_dto(d, ctx)?),
        ContainerDto::Emoji(d) => Container::Emoji(EmojiContainer::decode_dto(d, ctx)?),
    };
    Ok(container)
}

/// Encode a container list, keeping paint order. `None` encodes to `None`.
pub fn encode_container_list(
    containers: Option<&[Container]>,
    ctx: &EncodeContext<'_>,
) -> Result<Option<Vec<ContainerDto>>> {
    let Some(containers) = containers else {
        return Ok(None);
    };

    containers
        .iter()
        .map(|container| encode_container(container, ctx))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Decode a container list, keeping paint order.
///
/// The first failing container aborts the whole list.
pub fn decode_container_list(
    dtos: Vec<ContainerDto>,
    ctx: &DecodeContext<'_>,
) -> Result<Vec<Container>> {
    dtos.into_iter()
        .enumerate()
        .map(|(index, dto)| {
            let kind = dto.kind_name();
            decode_container(dto, ctx).inspect_err(|err| {
                tracing::error!(index, kind, error = %err, "Failed to decode container");
            })
        })
        .collect()
}
