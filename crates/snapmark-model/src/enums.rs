//! Closed vocabularies used by containers and their fields.
//!
//! Field kinds are identified by a stable symbolic name rather than by their
//! position in the enum, so inserting or reordering kinds never changes what
//! an existing name refers to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A named rendering property a container may carry.
///
/// The declaration order is the iteration order of a [`crate::FieldSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    ArrowHeads,
    BlurRadius,
    Brightness,
    FillColor,
    FontBold,
    FontFamily,
    FontItalic,
    FontSize,
    TextHorizontalAlignment,
    TextVerticalAlignment,
    HighlightColor,
    LineColor,
    LineThickness,
    MagnificationFactor,
    PixelSize,
    PreviewQuality,
    Shadow,
    PreparedFilterObfuscate,
    PreparedFilterHighlight,
    Flags,
}

impl FieldKind {
    /// Every field kind, in declaration order.
    pub const ALL: [FieldKind; 20] = [
        FieldKind::ArrowHeads,
        FieldKind::BlurRadius,
        FieldKind::Brightness,
        FieldKind::FillColor,
        FieldKind::FontBold,
        FieldKind::FontFamily,
        FieldKind::FontItalic,
        FieldKind::FontSize,
        FieldKind::TextHorizontalAlignment,
        FieldKind::TextVerticalAlignment,
        FieldKind::HighlightColor,
        FieldKind::LineColor,
        FieldKind::LineThickness,
        FieldKind::MagnificationFactor,
        FieldKind::PixelSize,
        FieldKind::PreviewQuality,
        FieldKind::Shadow,
        FieldKind::PreparedFilterObfuscate,
        FieldKind::PreparedFilterHighlight,
        FieldKind::Flags,
    ];

    /// Returns the persisted symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::ArrowHeads => "ARROWHEADS",
            FieldKind::BlurRadius => "BLUR_RADIUS",
            FieldKind::Brightness => "BRIGHTNESS",
            FieldKind::FillColor => "FILL_COLOR",
            FieldKind::FontBold => "FONT_BOLD",
            FieldKind::FontFamily => "FONT_FAMILY",
            FieldKind::FontItalic => "FONT_ITALIC",
            FieldKind::FontSize => "FONT_SIZE",
            FieldKind::TextHorizontalAlignment => "TEXT_HORIZONTAL_ALIGNMENT",
            FieldKind::TextVerticalAlignment => "TEXT_VERTICAL_ALIGNMENT",
            FieldKind::HighlightColor => "HIGHLIGHT_COLOR",
            FieldKind::LineColor => "LINE_COLOR",
            FieldKind::LineThickness => "LINE_THICKNESS",
            FieldKind::MagnificationFactor => "MAGNIFICATION_FACTOR",
            FieldKind::PixelSize => "PIXEL_SIZE",
            FieldKind::PreviewQuality => "PREVIEW_QUALITY",
            FieldKind::Shadow => "SHADOW",
            FieldKind::PreparedFilterObfuscate => "PREPARED_FILTER_OBFUSCATE",
            FieldKind::PreparedFilterHighlight => "PREPARED_FILTER_HIGHLIGHT",
            FieldKind::Flags => "FLAGS",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    /// Parse a symbolic field kind name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownFieldKind(s.to_string()))
    }
}

/// The fourteen kinds of drawable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    Line,
    Rectangle,
    Ellipse,
    Arrow,
    Freehand,
    Highlight,
    Obfuscate,
    Speechbubble,
    StepLabel,
    Text,
    Image,
    Metafile,
    Svg,
    Emoji,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 14] = [
        ContainerKind::Line,
        ContainerKind::Rectangle,
        ContainerKind::Ellipse,
        ContainerKind::Arrow,
        ContainerKind::Freehand,
        ContainerKind::Highlight,
        ContainerKind::Obfuscate,
        ContainerKind::Speechbubble,
        ContainerKind::StepLabel,
        ContainerKind::Text,
        ContainerKind::Image,
        ContainerKind::Metafile,
        ContainerKind::Svg,
        ContainerKind::Emoji,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Line => "Line",
            ContainerKind::Rectangle => "Rectangle",
            ContainerKind::Ellipse => "Ellipse",
            ContainerKind::Arrow => "Arrow",
            ContainerKind::Freehand => "Freehand",
            ContainerKind::Highlight => "Highlight",
            ContainerKind::Obfuscate => "Obfuscate",
            ContainerKind::Speechbubble => "Speechbubble",
            ContainerKind::StepLabel => "StepLabel",
            ContainerKind::Text => "Text",
            ContainerKind::Image => "Image",
            ContainerKind::Metafile => "Metafile",
            ContainerKind::Svg => "Svg",
            ContainerKind::Emoji => "Emoji",
        }
    }

    /// Scope string stamped on the fields owned by this kind.
    pub fn scope(&self) -> &'static str {
        match self {
            ContainerKind::Line => "LineContainer",
            ContainerKind::Rectangle => "RectangleContainer",
            ContainerKind::Ellipse => "EllipseContainer",
            ContainerKind::Arrow => "ArrowContainer",
            ContainerKind::Freehand => "FreehandContainer",
            ContainerKind::Highlight => "HighlightContainer",
            ContainerKind::Obfuscate => "ObfuscateContainer",
            ContainerKind::Speechbubble => "SpeechbubbleContainer",
            ContainerKind::StepLabel => "StepLabelContainer",
            ContainerKind::Text => "TextContainer",
            ContainerKind::Image => "ImageContainer",
            ContainerKind::Metafile => "MetafileContainer",
            ContainerKind::Svg => "SvgContainer",
            ContainerKind::Emoji => "EmojiContainer",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which ends of an arrow carry an arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArrowHeadCombination {
    None,
    StartPoint,
    #[default]
    EndPoint,
    Both,
}

/// Filter applied by highlight and obfuscate containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreparedFilter {
    Blur,
    Pixelize,
    TextHighlight,
    AreaHighlight,
    Grayscale,
    Magnification,
}

impl PreparedFilter {
    /// Returns true for filters offered by highlight containers.
    pub fn is_highlight(&self) -> bool {
        matches!(
            self,
            PreparedFilter::TextHighlight
                | PreparedFilter::AreaHighlight
                | PreparedFilter::Grayscale
                | PreparedFilter::Magnification
        )
    }
}

/// Text alignment along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    Near,
    #[default]
    Center,
    Far,
}

/// Behaviour flags attached to a field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldFlags(u32);

impl FieldFlags {
    pub const NONE: FieldFlags = FieldFlags(0);
    pub const CONFIRMABLE: FieldFlags = FieldFlags(1);
    pub const COUNTER: FieldFlags = FieldFlags(2);

    pub const fn from_bits(bits: u32) -> Self {
        FieldFlags(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: FieldFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: FieldFlags) -> Self {
        FieldFlags(self.0 | other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!(
            "LINE_THICKNESS".parse::<FieldKind>().unwrap(),
            FieldKind::LineThickness
        );
        assert_eq!(
            "prepared_filter_highlight".parse::<FieldKind>().unwrap(),
            FieldKind::PreparedFilterHighlight
        );
        assert!("LINE_WIDTH".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_field_kind_names_are_unique() {
        let mut names: Vec<&str> = FieldKind::ALL.iter().map(FieldKind::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FieldKind::ALL.len());
    }

    #[test]
    fn test_every_name_parses_back() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_field_flags() {
        let flags = FieldFlags::CONFIRMABLE.union(FieldFlags::COUNTER);
        assert!(flags.contains(FieldFlags::COUNTER));
        assert!(flags.contains(FieldFlags::CONFIRMABLE));
        assert!(!FieldFlags::NONE.contains(FieldFlags::COUNTER));
        assert_eq!(flags.bits(), 3);
    }

    #[test]
    fn test_highlight_filters() {
        assert!(PreparedFilter::TextHighlight.is_highlight());
        assert!(!PreparedFilter::Pixelize.is_highlight());
    }
}
