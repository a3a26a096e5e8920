//! Compiled-in default fields per container kind.
//!
//! A freshly created container always carries its kind's defaults, whether
//! or not the editor ever touches them.

use crate::color::Color;
use crate::enums::{
    ArrowHeadCombination, ContainerKind, FieldFlags, FieldKind, PreparedFilter, TextAlignment,
};
use crate::field::{Field, FieldSet, FieldValue};

const DEFAULT_FONT_FAMILY: &str = "Arial";

/// The default `(kind, value)` pairs for a container kind.
pub fn default_values(kind: ContainerKind) -> Vec<(FieldKind, FieldValue)> {
    match kind {
        ContainerKind::Line => vec![
            (FieldKind::LineThickness, 2.into()),
            (FieldKind::LineColor, Color::RED.into()),
            (FieldKind::Shadow, true.into()),
        ],
        ContainerKind::Rectangle | ContainerKind::Ellipse => vec![
            (FieldKind::LineThickness, 2.into()),
            (FieldKind::LineColor, Color::RED.into()),
            (FieldKind::FillColor, Color::TRANSPARENT.into()),
            (FieldKind::Shadow, true.into()),
        ],
        ContainerKind::Arrow => vec![
            (FieldKind::LineThickness, 2.into()),
            (FieldKind::ArrowHeads, ArrowHeadCombination::EndPoint.into()),
            (FieldKind::LineColor, Color::RED.into()),
            (FieldKind::FillColor, Color::TRANSPARENT.into()),
            (FieldKind::Shadow, true.into()),
        ],
        ContainerKind::Freehand => vec![
            (FieldKind::LineThickness, 3.into()),
            (FieldKind::LineColor, Color::RED.into()),
            (FieldKind::Shadow, true.into()),
        ],
        ContainerKind::Highlight => vec![
            (FieldKind::LineThickness, 0.into()),
            (FieldKind::LineColor, Color::RED.into()),
            (FieldKind::Shadow, false.into()),
            (
                FieldKind::PreparedFilterHighlight,
                PreparedFilter::TextHighlight.into(),
            ),
            (FieldKind::HighlightColor, Color::YELLOW.into()),
            (FieldKind::Brightness, 0.9f64.into()),
            (FieldKind::MagnificationFactor, 2.into()),
        ],
        ContainerKind::Obfuscate => vec![
            (FieldKind::LineThickness, 0.into()),
            (FieldKind::LineColor, Color::RED.into()),
            (FieldKind::Shadow, false.into()),
            (
                FieldKind::PreparedFilterObfuscate,
                PreparedFilter::Pixelize.into(),
            ),
            (FieldKind::PixelSize, 5.into()),
            (FieldKind::BlurRadius, 3.into()),
            (FieldKind::PreviewQuality, 1.0f32.into()),
        ],
        ContainerKind::Speechbubble => text_defaults(Color::BLUE, false, true, Color::WHITE, 20.0),
        ContainerKind::StepLabel => vec![
            (FieldKind::FillColor, Color::DARK_RED.into()),
            (FieldKind::LineColor, Color::WHITE.into()),
            (FieldKind::Flags, FieldFlags::COUNTER.into()),
        ],
        ContainerKind::Text => {
            text_defaults(Color::RED, true, false, Color::TRANSPARENT, 11.0)
        }
        ContainerKind::Image | ContainerKind::Metafile | ContainerKind::Svg => {
            vec![(FieldKind::Shadow, false.into())]
        }
        ContainerKind::Emoji => Vec::new(),
    }
}

fn text_defaults(
    line_color: Color,
    shadow: bool,
    bold: bool,
    fill_color: Color,
    font_size: f32,
) -> Vec<(FieldKind, FieldValue)> {
    vec![
        (FieldKind::LineThickness, 2.into()),
        (FieldKind::LineColor, line_color.into()),
        (FieldKind::Shadow, shadow.into()),
        (FieldKind::FontItalic, false.into()),
        (FieldKind::FontBold, bold.into()),
        (FieldKind::FillColor, fill_color.into()),
        (FieldKind::FontFamily, DEFAULT_FONT_FAMILY.into()),
        (FieldKind::FontSize, font_size.into()),
        (
            FieldKind::TextHorizontalAlignment,
            TextAlignment::Center.into(),
        ),
        (FieldKind::TextVerticalAlignment, TextAlignment::Center.into()),
    ]
}

/// The default fields of a container kind, scoped to that kind.
pub fn default_fields(kind: ContainerKind) -> Vec<Field> {
    default_values(kind)
        .into_iter()
        .map(|(field_kind, value)| Field::new(field_kind, kind.scope(), value))
        .collect()
}

/// A field set holding exactly the defaults of `kind`.
pub fn default_field_set(kind: ContainerKind) -> FieldSet {
    default_fields(kind).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_defaults() {
        let set = default_field_set(ContainerKind::Line);
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.value(FieldKind::LineThickness),
            Some(&FieldValue::Int(2))
        );
        assert_eq!(
            set.value(FieldKind::LineColor),
            Some(&FieldValue::Color(Color::RED))
        );
        assert_eq!(set.value(FieldKind::Shadow), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_defaults_carry_kind_scope() {
        for kind in ContainerKind::ALL {
            for field in default_fields(kind) {
                assert_eq!(field.scope, kind.scope());
            }
        }
    }

    #[test]
    fn test_no_duplicate_default_kinds() {
        for kind in ContainerKind::ALL {
            let values = default_values(kind);
            let set = default_field_set(kind);
            assert_eq!(values.len(), set.len(), "duplicate default on {kind}");
        }
    }

    #[test]
    fn test_emoji_has_no_defaults() {
        assert!(default_field_set(ContainerKind::Emoji).is_empty());
    }
}
