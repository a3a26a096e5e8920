//! Per-kind container DTOs.
//!
//! Every container kind has its own DTO type. There is no
//! catch-all shape: a new container kind needs a new DTO and a new
//! [`ContainerDto`] variant.

use rkyv::{Archive, Deserialize, Serialize};

use super::{ArrowHeadCombinationDto, FieldDto, PointDto, PreparedFilterDto};

/// A persisted container, tagged by kind.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum ContainerDto {
    Line(LineContainerDto),
    Rectangle(RectangleContainerDto),
    Ellipse(EllipseContainerDto),
    Arrow(ArrowContainerDto),
    Freehand(FreehandContainerDto),
    Highlight(HighlightContainerDto),
    Obfuscate(ObfuscateContainerDto),
    Speechbubble(SpeechbubbleContainerDto),
    StepLabel(StepLabelContainerDto),
    Text(TextContainerDto),
    Image(ImageContainerDto),
    Metafile(MetafileContainerDto),
    Svg(SvgContainerDto),
    Emoji(EmojiContainerDto),
}

impl ContainerDto {
    /// Name of the container kind this DTO holds.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContainerDto::Line(_) => "Line",
            ContainerDto::Rectangle(_) => "Rectangle",
            ContainerDto::Ellipse(_) => "Ellipse",
            ContainerDto::Arrow(_) => "Arrow",
            ContainerDto::Freehand(_) => "Freehand",
            ContainerDto::Highlight(_) => "Highlight",
            ContainerDto::Obfuscate(_) => "Obfuscate",
            ContainerDto::Speechbubble(_) => "Speechbubble",
            ContainerDto::StepLabel(_) => "StepLabel",
            ContainerDto::Text(_) => "Text",
            ContainerDto::Image(_) => "Image",
            ContainerDto::Metafile(_) => "Metafile",
            ContainerDto::Svg(_) => "Svg",
            ContainerDto::Emoji(_) => "Emoji",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct LineContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct RectangleContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct EllipseContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct ArrowContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Arrowheads, mirrored from the `ARROWHEADS` field.
    pub arrow_heads: ArrowHeadCombinationDto,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct FreehandContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Captured points in drawing order.
    pub capture_points: Vec<PointDto>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct HighlightContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Filter, mirrored from the `PREPARED_FILTER_HIGHLIGHT` field.
    pub prepared_filter: PreparedFilterDto,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct ObfuscateContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Filter, mirrored from the `PREPARED_FILTER_OBFUSCATE` field.
    pub prepared_filter: PreparedFilterDto,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct SpeechbubbleContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    pub text: String,

    /// Point the bubble's tail aims at.
    pub target_gripper: PointDto,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct StepLabelContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    pub number: i32,

    pub counter_start: i32,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct TextContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct ImageContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Encoded raster image, as produced by the asset codec.
    pub image: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct MetafileContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Encoded metafile, as produced by the asset codec.
    pub metafile: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct SvgContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Encoded SVG document, as produced by the asset codec.
    pub svg: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct EmojiContainerDto {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,

    /// Complete field set, defaults included.
    pub fields: Vec<FieldDto>,

    /// Emoji code-point string.
    pub emoji: String,

    /// Rotation in degrees.
    pub rotation_angle: i32,
}
