//! Fields: the typed rendering properties carried by containers.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;

use crate::color::Color;
use crate::decimal::Decimal;
use crate::enums::{ArrowHeadCombination, FieldFlags, FieldKind, PreparedFilter, TextAlignment};
use crate::error::{ModelError, Result};

/// The value of a field.
///
/// This is the complete set of value types a field may hold. `Null` is an
/// explicit "set to nothing", which is different from the field being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i32),
    Str(String),
    Bool(bool),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Color(Color),
    ArrowHeads(ArrowHeadCombination),
    PreparedFilter(PreparedFilter),
    TextAlignment(TextAlignment),
    Flags(FieldFlags),
    Null,
}

impl FieldValue {
    /// Equality as the persisted form sees it: colors compare by ARGB only.
    pub fn same_value(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Color(a), FieldValue::Color(b)) => a.same_argb(b),
            (a, b) => a == b,
        }
    }

    /// Convert a boxed editor value into a field value.
    ///
    /// `()` maps to [`FieldValue::Null`]. Any type outside the supported set
    /// is rejected.
    pub fn from_dyn(value: &dyn Any) -> Result<Self> {
        if let Some(v) = value.downcast_ref::<FieldValue>() {
            return Ok(v.clone());
        }
        if let Some(v) = value.downcast_ref::<i32>() {
            return Ok(FieldValue::Int(*v));
        }
        if let Some(v) = value.downcast_ref::<String>() {
            return Ok(FieldValue::Str(v.clone()));
        }
        if let Some(v) = value.downcast_ref::<&'static str>() {
            return Ok(FieldValue::Str((*v).to_string()));
        }
        if let Some(v) = value.downcast_ref::<bool>() {
            return Ok(FieldValue::Bool(*v));
        }
        if let Some(v) = value.downcast_ref::<f32>() {
            return Ok(FieldValue::F32(*v));
        }
        if let Some(v) = value.downcast_ref::<f64>() {
            return Ok(FieldValue::F64(*v));
        }
        if let Some(v) = value.downcast_ref::<Decimal>() {
            return Ok(FieldValue::Decimal(*v));
        }
        if let Some(v) = value.downcast_ref::<Color>() {
            return Ok(FieldValue::Color(v.clone()));
        }
        if let Some(v) = value.downcast_ref::<ArrowHeadCombination>() {
            return Ok(FieldValue::ArrowHeads(*v));
        }
        if let Some(v) = value.downcast_ref::<PreparedFilter>() {
            return Ok(FieldValue::PreparedFilter(*v));
        }
        if let Some(v) = value.downcast_ref::<TextAlignment>() {
            return Ok(FieldValue::TextAlignment(*v));
        }
        if let Some(v) = value.downcast_ref::<FieldFlags>() {
            return Ok(FieldValue::Flags(*v));
        }
        if value.is::<()>() {
            return Ok(FieldValue::Null);
        }

        Err(ModelError::UnsupportedValueType {
            type_id: value.type_id(),
        })
    }

    /// Name of the value's variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "int",
            FieldValue::Str(_) => "string",
            FieldValue::Bool(_) => "bool",
            FieldValue::F32(_) => "f32",
            FieldValue::F64(_) => "f64",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Color(_) => "color",
            FieldValue::ArrowHeads(_) => "arrowheads",
            FieldValue::PreparedFilter(_) => "prepared filter",
            FieldValue::TextAlignment(_) => "text alignment",
            FieldValue::Flags(_) => "flags",
            FieldValue::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            FieldValue::Color(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_arrow_heads(&self) -> Option<ArrowHeadCombination> {
        match self {
            FieldValue::ArrowHeads(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_prepared_filter(&self) -> Option<PreparedFilter> {
        match self {
            FieldValue::PreparedFilter(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::F32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::F64(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<Color> for FieldValue {
    fn from(value: Color) -> Self {
        FieldValue::Color(value)
    }
}

impl From<ArrowHeadCombination> for FieldValue {
    fn from(value: ArrowHeadCombination) -> Self {
        FieldValue::ArrowHeads(value)
    }
}

impl From<PreparedFilter> for FieldValue {
    fn from(value: PreparedFilter) -> Self {
        FieldValue::PreparedFilter(value)
    }
}

impl From<TextAlignment> for FieldValue {
    fn from(value: TextAlignment) -> Self {
        FieldValue::TextAlignment(value)
    }
}

impl From<FieldFlags> for FieldValue {
    fn from(value: FieldFlags) -> Self {
        FieldValue::Flags(value)
    }
}

/// A named, scoped rendering property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub kind: FieldKind,
    pub scope: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(kind: FieldKind, scope: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            kind,
            scope: scope.into(),
            value: value.into(),
        }
    }
}

/// The fields of one container, keyed by kind.
///
/// Iteration follows [`FieldKind`] declaration order, so the same set always
/// enumerates the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    fields: BTreeMap<FieldKind, Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: FieldKind) -> Option<&Field> {
        self.fields.get(&kind)
    }

    pub fn value(&self, kind: FieldKind) -> Option<&FieldValue> {
        self.fields.get(&kind).map(|field| &field.value)
    }

    pub fn contains(&self, kind: FieldKind) -> bool {
        self.fields.contains_key(&kind)
    }

    /// Insert a field, replacing any field of the same kind.
    pub fn insert(&mut self, field: Field) -> Option<Field> {
        self.fields.insert(field.kind, field)
    }

    /// Set the value of an existing field, or add it under `scope`.
    pub fn set(&mut self, kind: FieldKind, scope: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.fields.get_mut(&kind) {
            Some(field) => field.value = value,
            None => {
                self.fields.insert(kind, Field::new(kind, scope, value));
            }
        }
    }

    /// Like [`FieldSet::set`], for a boxed editor value.
    pub fn set_dyn(&mut self, kind: FieldKind, scope: &str, value: &dyn Any) -> Result<()> {
        let value = FieldValue::from_dyn(value)?;
        self.set(kind, scope, value);
        Ok(())
    }

    pub fn remove(&mut self, kind: FieldKind) -> Option<Field> {
        self.fields.remove(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn kinds(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Same kinds, same scopes and [`FieldValue::same_value`] values.
    pub fn same_values(&self, other: &FieldSet) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| {
                a.kind == b.kind && a.scope == b.scope && a.value.same_value(&b.value)
            })
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|field| (field.kind, field)).collect(),
        }
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = std::collections::btree_map::IntoValues<FieldKind, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[test]
    fn test_from_dyn_supported() {
        assert_eq!(FieldValue::from_dyn(&7i32).unwrap(), FieldValue::Int(7));
        assert_eq!(
            FieldValue::from_dyn(&"Arial").unwrap(),
            FieldValue::Str("Arial".to_string())
        );
        assert_eq!(FieldValue::from_dyn(&()).unwrap(), FieldValue::Null);
        assert_eq!(
            FieldValue::from_dyn(&TextAlignment::Far).unwrap(),
            FieldValue::TextAlignment(TextAlignment::Far)
        );
    }

    #[test]
    fn test_from_dyn_rejects_unknown_type() {
        struct Gradient;
        let err = FieldValue::from_dyn(&Gradient).unwrap_err();
        match err {
            ModelError::UnsupportedValueType { type_id } => {
                assert_eq!(type_id, TypeId::of::<Gradient>());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(FieldValue::from_dyn(&5u64).is_err());
    }

    #[test]
    fn test_field_set_iterates_in_kind_order() {
        let mut set = FieldSet::new();
        set.set(FieldKind::Shadow, "LineContainer", true);
        set.set(FieldKind::LineThickness, "LineContainer", 2);
        set.set(FieldKind::ArrowHeads, "LineContainer", ArrowHeadCombination::Both);

        let kinds: Vec<FieldKind> = set.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::ArrowHeads,
                FieldKind::LineThickness,
                FieldKind::Shadow
            ]
        );
    }

    #[test]
    fn test_set_keeps_scope_of_existing_field() {
        let mut set = FieldSet::new();
        set.insert(Field::new(FieldKind::LineColor, "LineContainer", Color::RED));
        set.set(FieldKind::LineColor, "Other", Color::BLUE);

        let field = set.get(FieldKind::LineColor).unwrap();
        assert_eq!(field.scope, "LineContainer");
        assert_eq!(field.value, FieldValue::Color(Color::BLUE));
    }

    #[test]
    fn test_same_values_ignores_color_names() {
        let named: FieldSet = [Field::new(FieldKind::LineColor, "LineContainer", Color::RED)]
            .into_iter()
            .collect();
        let unnamed: FieldSet = [Field::new(
            FieldKind::LineColor,
            "LineContainer",
            Color::from_argb(0xFFFF_0000),
        )]
        .into_iter()
        .collect();

        assert_ne!(named, unnamed);
        assert!(named.same_values(&unnamed));
        assert!(!named.same_values(&FieldSet::new()));
    }
}
