//! Colors as stored on fields.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A 32-bit ARGB color, optionally carrying the name of a known color.
///
/// Structural equality includes the name, so `Color::RED` and
/// `Color::from_argb(0xFFFF0000)` are not `==`. Use [`Color::same_argb`]
/// when only the rendered value matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    argb: u32,
    name: Option<Cow<'static, str>>,
}

impl Color {
    pub const TRANSPARENT: Color = Color::named("Transparent", 0x00FF_FFFF);
    pub const RED: Color = Color::named("Red", 0xFFFF_0000);
    pub const BLUE: Color = Color::named("Blue", 0xFF00_00FF);
    pub const WHITE: Color = Color::named("White", 0xFFFF_FFFF);
    pub const BLACK: Color = Color::named("Black", 0xFF00_0000);
    pub const YELLOW: Color = Color::named("Yellow", 0xFFFF_FF00);
    pub const DARK_RED: Color = Color::named("DarkRed", 0xFF8B_0000);

    const fn named(name: &'static str, argb: u32) -> Self {
        Self {
            argb,
            name: Some(Cow::Borrowed(name)),
        }
    }

    /// Create an unnamed color from its packed ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Self { argb, name: None }
    }

    pub const fn from_components(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::from_argb((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(&self) -> u32 {
        self.argb
    }

    pub const fn alpha(&self) -> u8 {
        (self.argb >> 24) as u8
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Compare by ARGB value only, ignoring any color name.
    pub fn same_argb(&self, other: &Color) -> bool {
        self.argb == other.argb
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "#{:08X}", self.argb),
        }
    }
}
