//! Line-based shapes: lines, rectangles, ellipses, arrows and freehand strokes.

use serde::{Deserialize, Serialize};

use crate::defaults::default_field_set;
use crate::enums::{ArrowHeadCombination, ContainerKind, FieldKind};
use crate::field::{FieldSet, FieldValue};
use crate::geometry::{Bounds, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineContainer {
    bounds: Bounds,
    fields: FieldSet,
}

impl LineContainer {
    pub fn new(bounds: Bounds) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Line))
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet) -> Self {
        Self { bounds, fields }
    }
}

impl_drawable!(LineContainer, Line);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleContainer {
    bounds: Bounds,
    fields: FieldSet,
}

impl RectangleContainer {
    pub fn new(bounds: Bounds) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Rectangle))
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet) -> Self {
        Self { bounds, fields }
    }
}

impl_drawable!(RectangleContainer, Rectangle);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseContainer {
    bounds: Bounds,
    fields: FieldSet,
}

impl EllipseContainer {
    pub fn new(bounds: Bounds) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Ellipse))
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet) -> Self {
        Self { bounds, fields }
    }
}

impl_drawable!(EllipseContainer, Ellipse);

/// A line with optional arrowheads.
///
/// The arrowhead combination lives in the `ARROWHEADS` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowContainer {
    bounds: Bounds,
    fields: FieldSet,
}

impl ArrowContainer {
    pub fn new(bounds: Bounds) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Arrow))
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet) -> Self {
        Self { bounds, fields }
    }

    /// The current arrowheads, falling back to the default when the field is
    /// missing or holds another type.
    pub fn arrow_heads(&self) -> ArrowHeadCombination {
        self.fields
            .value(FieldKind::ArrowHeads)
            .and_then(FieldValue::as_arrow_heads)
            .unwrap_or_default()
    }

    pub fn set_arrow_heads(&mut self, arrow_heads: ArrowHeadCombination) {
        self.fields.set(
            FieldKind::ArrowHeads,
            ContainerKind::Arrow.scope(),
            arrow_heads,
        );
    }
}

impl_drawable!(ArrowContainer, Arrow);

/// A freehand stroke through an ordered list of captured points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreehandContainer {
    bounds: Bounds,
    fields: FieldSet,
    points: Vec<Point>,
}

impl FreehandContainer {
    pub fn new(bounds: Bounds, points: Vec<Point>) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Freehand), points)
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet, points: Vec<Point>) -> Self {
        Self {
            bounds,
            fields,
            points,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl_drawable!(FreehandContainer, Freehand);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Drawable;

    #[test]
    fn test_arrow_heads_follow_field() {
        let mut arrow = ArrowContainer::new(Bounds::new(0, 0, 5, 5));
        assert_eq!(arrow.arrow_heads(), ArrowHeadCombination::EndPoint);

        arrow.set_arrow_heads(ArrowHeadCombination::Both);
        assert_eq!(arrow.arrow_heads(), ArrowHeadCombination::Both);

        arrow.fields_mut().remove(FieldKind::ArrowHeads);
        assert_eq!(arrow.arrow_heads(), ArrowHeadCombination::EndPoint);
    }

    #[test]
    fn test_freehand_keeps_point_order() {
        let mut freehand = FreehandContainer::new(Bounds::default(), vec![Point::new(3, 3)]);
        freehand.add_point(Point::new(1, 1));
        freehand.add_point(Point::new(2, 2));
        assert_eq!(
            freehand.points(),
            &[Point::new(3, 3), Point::new(1, 1), Point::new(2, 2)]
        );
    }
}
