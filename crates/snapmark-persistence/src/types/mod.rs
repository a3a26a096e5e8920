//! DTO tree for persisted documents.
//!
//! These types are the closed, fully typed mirror of the live model and are
//! what gets archived. They derive rkyv traits so the tree can be archived
//! without an intermediate representation.

mod container;
mod document;
mod field;

pub use container::{
    ArrowContainerDto, ContainerDto, EllipseContainerDto, EmojiContainerDto,
    FreehandContainerDto, HighlightContainerDto, ImageContainerDto, LineContainerDto,
    MetafileContainerDto, ObfuscateContainerDto, RectangleContainerDto,
    SpeechbubbleContainerDto, StepLabelContainerDto, SvgContainerDto, TextContainerDto,
};
pub use document::{DocumentDto, MetaInformationDto};
pub use field::{
    ArrowHeadCombinationDto, DecimalDto, FieldDto, FieldValueDto, PointDto, PreparedFilterDto,
    TextAlignmentDto,
};

/// Current schema version.
///
/// Increment this when the persisted shape or the default field tables
/// change, and register the new version's table in the version registry.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Oldest schema version the decoder still accepts.
pub const MIN_SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Magic bytes at the start of an archived document.
///
/// Format: "SMK" + format revision byte
pub const MAGIC_BYTES: [u8; 4] = [b'S', b'M', b'K', 0x01];
