//! Containers that embed pictures: raster images, metafiles, SVG and emoji.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::defaults::default_field_set;
use crate::enums::ContainerKind;
use crate::field::FieldSet;
use crate::geometry::Bounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContainer {
    bounds: Bounds,
    fields: FieldSet,
    image: Asset,
}

impl ImageContainer {
    pub fn new(bounds: Bounds, image: Asset) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Image), image)
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet, image: Asset) -> Self {
        Self {
            bounds,
            fields,
            image,
        }
    }

    pub fn image(&self) -> &Asset {
        &self.image
    }
}

impl_drawable!(ImageContainer, Image);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetafileContainer {
    bounds: Bounds,
    fields: FieldSet,
    metafile: Asset,
}

impl MetafileContainer {
    pub fn new(bounds: Bounds, metafile: Asset) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Metafile), metafile)
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet, metafile: Asset) -> Self {
        Self {
            bounds,
            fields,
            metafile,
        }
    }

    pub fn metafile(&self) -> &Asset {
        &self.metafile
    }
}

impl_drawable!(MetafileContainer, Metafile);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgContainer {
    bounds: Bounds,
    fields: FieldSet,
    svg: Asset,
}

impl SvgContainer {
    pub fn new(bounds: Bounds, svg: Asset) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Svg), svg)
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet, svg: Asset) -> Self {
        Self {
            bounds,
            fields,
            svg,
        }
    }

    pub fn svg(&self) -> &Asset {
        &self.svg
    }
}

impl_drawable!(SvgContainer, Svg);

/// An emoji glyph, stored as its code-point string, drawn rotated by
/// `rotation_angle` degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiContainer {
    bounds: Bounds,
    fields: FieldSet,
    emoji: String,
    rotation_angle: i32,
}

impl EmojiContainer {
    pub fn new(bounds: Bounds, emoji: impl Into<String>, rotation_angle: i32) -> Self {
        Self::from_parts(
            bounds,
            default_field_set(ContainerKind::Emoji),
            emoji,
            rotation_angle,
        )
    }

    pub fn from_parts(
        bounds: Bounds,
        fields: FieldSet,
        emoji: impl Into<String>,
        rotation_angle: i32,
    ) -> Self {
        Self {
            bounds,
            fields,
            emoji: emoji.into(),
            rotation_angle,
        }
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn rotation_angle(&self) -> i32 {
        self.rotation_angle
    }

    pub fn set_rotation_angle(&mut self, angle: i32) {
        self.rotation_angle = angle;
    }
}

impl_drawable!(EmojiContainer, Emoji);
