//! Live editing model for Snapmark screenshot annotations.
//!
//! The editor creates and mutates these types while the user draws. The
//! persistence crate reads them at save time and rebuilds them at load time.
//!
//! # Module Organization
//!
//! - [`container`]: The closed [`Container`] sum and the fourteen concrete container types
//! - [`field`]: [`FieldValue`], [`Field`] and [`FieldSet`]
//! - [`enums`]: Field kinds, container kinds and the enum-valued field vocabularies
//! - [`defaults`]: Compiled-in default fields per container kind
//! - [`document`]: The top-level [`Document`]

pub mod asset;
pub mod color;
pub mod container;
pub mod decimal;
pub mod defaults;
pub mod document;
pub mod enums;
pub mod error;
pub mod field;
pub mod geometry;

pub use asset::{Asset, AssetKind};
pub use color::Color;
pub use container::{
    ArrowContainer, Container, Drawable, EllipseContainer, EmojiContainer, FreehandContainer,
    HighlightContainer, ImageContainer, LineContainer, MetafileContainer, ObfuscateContainer,
    RectangleContainer, SpeechbubbleContainer, StepLabelContainer, SvgContainer, TextContainer,
};
pub use decimal::Decimal;
pub use defaults::{default_field_set, default_fields};
pub use document::Document;
pub use enums::{
    ArrowHeadCombination, ContainerKind, FieldFlags, FieldKind, PreparedFilter, TextAlignment,
};
pub use error::{ModelError, Result};
pub use field::{Field, FieldSet, FieldValue};
pub use geometry::{Bounds, Point};
