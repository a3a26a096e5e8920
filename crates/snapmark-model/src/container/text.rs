//! Containers that render text.

use serde::{Deserialize, Serialize};

use crate::defaults::default_field_set;
use crate::enums::ContainerKind;
use crate::field::FieldSet;
use crate::geometry::{Bounds, Point};

/// A text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContainer {
    bounds: Bounds,
    fields: FieldSet,
    text: String,
}

impl TextContainer {
    pub fn new(bounds: Bounds, text: impl Into<String>) -> Self {
        Self::from_parts(bounds, default_field_set(ContainerKind::Text), text)
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet, text: impl Into<String>) -> Self {
        Self {
            bounds,
            fields,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl_drawable!(TextContainer, Text);

/// A text bubble with a tail pointing at `target_gripper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechbubbleContainer {
    bounds: Bounds,
    fields: FieldSet,
    text: String,
    target_gripper: Point,
}

impl SpeechbubbleContainer {
    pub fn new(bounds: Bounds, text: impl Into<String>, target_gripper: Point) -> Self {
        Self::from_parts(
            bounds,
            default_field_set(ContainerKind::Speechbubble),
            text,
            target_gripper,
        )
    }

    pub fn from_parts(
        bounds: Bounds,
        fields: FieldSet,
        text: impl Into<String>,
        target_gripper: Point,
    ) -> Self {
        Self {
            bounds,
            fields,
            text: text.into(),
            target_gripper,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn target_gripper(&self) -> Point {
        self.target_gripper
    }

    pub fn set_target_gripper(&mut self, target: Point) {
        self.target_gripper = target;
    }
}

impl_drawable!(SpeechbubbleContainer, Speechbubble);

/// A numbered step marker.
///
/// `counter_start` is the value the surface's step counter started from when
/// this label was numbered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLabelContainer {
    bounds: Bounds,
    fields: FieldSet,
    number: i32,
    counter_start: i32,
}

impl StepLabelContainer {
    pub fn new(bounds: Bounds, number: i32, counter_start: i32) -> Self {
        Self::from_parts(
            bounds,
            default_field_set(ContainerKind::StepLabel),
            number,
            counter_start,
        )
    }

    pub fn from_parts(bounds: Bounds, fields: FieldSet, number: i32, counter_start: i32) -> Self {
        Self {
            bounds,
            fields,
            number,
            counter_start,
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn set_number(&mut self, number: i32) {
        self.number = number;
    }

    pub fn counter_start(&self) -> i32 {
        self.counter_start
    }
}

impl_drawable!(StepLabelContainer, StepLabel);
