//! Codecs for text-bearing containers.

use snapmark_model::{
    Bounds, ContainerKind, Drawable, Point, SpeechbubbleContainer, StepLabelContainer,
    TextContainer,
};

use super::field::{decode_field_set, encode_fields};
use super::{DecodeContext, DecodeDto, EncodeContext, EncodeDto};
use crate::error::Result;
use crate::types::{SpeechbubbleContainerDto, StepLabelContainerDto, TextContainerDto};

impl EncodeDto for TextContainer {
    type Dto = TextContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(TextContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            text: self.text().to_string(),
        })
    }
}

impl DecodeDto for TextContainer {
    type Dto = TextContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let fields = decode_field_set(ContainerKind::Text, dto.fields, ctx)?;
        Ok(TextContainer::from_parts(bounds, fields, dto.text))
    }
}

impl EncodeDto for SpeechbubbleContainer {
    type Dto = SpeechbubbleContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(SpeechbubbleContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            text: self.text().to_string(),
            target_gripper: self.target_gripper().into(),
        })
    }
}

impl DecodeDto for SpeechbubbleContainer {
    type Dto = SpeechbubbleContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let fields = decode_field_set(ContainerKind::Speechbubble, dto.fields, ctx)?;
        Ok(SpeechbubbleContainer::from_parts(
            bounds,
            fields,
            dto.text,
            Point::from(dto.target_gripper),
        ))
    }
}

impl EncodeDto for StepLabelContainer {
    type Dto = StepLabelContainerDto;

    fn encode_dto(&self, _ctx: &EncodeContext<'_>) -> Result<Self::Dto> {
        let bounds = self.bounds();
        Ok(StepLabelContainerDto {
            left: bounds.left,
            top: bounds.top,
            width: bounds.width,
            height: bounds.height,
            fields: encode_fields(self.fields()),
            number: self.number(),
            counter_start: self.counter_start(),
        })
    }
}

impl DecodeDto for StepLabelContainer {
    type Dto = StepLabelContainerDto;

    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self> {
        let bounds = Bounds::new(dto.left, dto.top, dto.width, dto.height);
        let fields = decode_field_set(ContainerKind::StepLabel, dto.fields, ctx)?;
        Ok(StepLabelContainer::from_parts(
            bounds,
            fields,
            dto.number,
            dto.counter_start,
        ))
    }
}
