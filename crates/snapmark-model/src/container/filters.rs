//! Filter containers that alter the pixels underneath them.

use serde::{Deserialize, Serialize};

use crate::defaults::default_field_set;
use crate::enums::{ContainerKind, FieldKind, PreparedFilter};
use crate::field::{FieldSet, FieldValue};
use crate::geometry::Bounds;

/// Highlights the area it covers. The filter lives in `PREPARED_FILTER_HIGHLIGHT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightContainer {
    bounds: Bounds,
    fields: FieldSet,
}

impl HighlightContainer {
    pub fn new(bounds: Bounds) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Highlight))
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet) -> Self {
        Self { bounds, fields }
    }

    pub fn prepared_filter(&self) -> PreparedFilter {
        self.fields
            .value(FieldKind::PreparedFilterHighlight)
            .and_then(FieldValue::as_prepared_filter)
            .unwrap_or(PreparedFilter::TextHighlight)
    }

    pub fn set_prepared_filter(&mut self, filter: PreparedFilter) {
        self.fields.set(
            FieldKind::PreparedFilterHighlight,
            ContainerKind::Highlight.scope(),
            filter,
        );
    }
}

impl_drawable!(HighlightContainer, Highlight);

/// Hides the area it covers. The filter lives in `PREPARED_FILTER_OBFUSCATE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObfuscateContainer {
    bounds: Bounds,
    fields: FieldSet,
}

impl ObfuscateContainer {
    pub fn new(bounds: Bounds) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Obfuscate))
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet) -> Self {
        Self { bounds, fields }
    }

    pub fn prepared_filter(&self) -> PreparedFilter {
        self.fields
            .value(FieldKind::PreparedFilterObfuscate)
            .and_then(FieldValue::as_prepared_filter)
            .unwrap_or(PreparedFilter::Pixelize)
    }

    pub fn set_prepared_filter(&mut self, filter: PreparedFilter) {
        self.fields.set(
            FieldKind::PreparedFilterObfuscate,
            ContainerKind::Obfuscate.scope(),
            filter,
        );
    }
}

impl_drawable!(ObfuscateContainer, Obfuscate);
