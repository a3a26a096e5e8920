//! Pixel-space geometry shared by all containers.
//!
//! Coordinates are integers in the captured image's pixel space, with the
//! origin at the top-left corner. Width and height may be negative while a
//! shape is being dragged out; they are kept exactly as given.

use serde::{Deserialize, Serialize};

/// Position and size of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A single point, used for freehand capture points and speech bubble targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
