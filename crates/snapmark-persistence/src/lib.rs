//! Versioned document codec for Snapmark annotation files.
//!
//! This crate converts an annotated screenshot ([`snapmark_model::Document`])
//! into a closed, fully typed DTO tree and back, so the tree can be archived
//! and later reloaded by this or a newer build.
//!
//! # Features
//!
//! - **Closed DTO tree**: one DTO type per container kind, matched exhaustively
//! - **Stable field names**: field kinds are persisted by symbolic name
//! - **Version gate**: documents outside the supported range are rejected whole
//! - **Backfill**: fields missing from older documents get current defaults
//! - **Zero-copy archives** with rkyv
//!
//! # Archive Format
//!
//! ```text
//! +------------------+
//! | Magic: "SMK\x01" | 4 bytes - document identification
//! +------------------+
//! | Version: 2       | 4 bytes - u32 little-endian schema version
//! +------------------+
//! | rkyv Payload     | Variable - archived DocumentDto
//! +------------------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! use snapmark_model::{Asset, Bounds, Document, LineContainer};
//! use snapmark_persistence::{DigestAssetCodec, DocumentCodec, VersionRegistry};
//!
//! let registry = VersionRegistry::builtin();
//! let assets = DigestAssetCodec::new();
//! let codec = DocumentCodec::new(&registry, &assets);
//!
//! let mut document = Document::new(Asset::raster(png_bytes));
//! document.push(LineContainer::new(Bounds::new(10, 20, 100, 50)));
//!
//! let dto = codec.encode(Some(&document))?.expect("document given");
//! let bytes = snapmark_persistence::to_archive_bytes(&dto)?;
//!
//! let dto = snapmark_persistence::from_archive_bytes(&bytes, &registry)?;
//! let loaded = codec.decode(dto)?;
//! ```
//!
//! # Architecture
//!
//! The crate is organized into:
//!
//! - `types/` - DTO tree (rkyv-serializable)
//! - `codec/` - model to DTO conversion, leaf-first
//! - `registry.rs` - supported schema versions and their default tables
//! - `asset.rs` - embedded asset codec collaborator
//! - `archive.rs` - byte envelope around an archived DTO tree
//! - `options.rs` - codec configuration
//! - `error.rs` - Error types with user-friendly messages

mod archive;
mod asset;
mod codec;
mod error;
mod options;
mod registry;
mod types;

pub use archive::{from_archive_bytes, to_archive_bytes};
pub use asset::{AssetCodec, AssetError, DigestAssetCodec};
pub use codec::{
    DecodeContext, DecodeDto, DocumentCodec, EncodeContext, EncodeDto, decode_container,
    decode_container_list, decode_field, decode_value, encode_container, encode_container_list,
    encode_dyn_value, encode_field, encode_value,
};
pub use error::{CodecError, Result};
pub use options::CodecOptions;
pub use registry::{VersionRegistry, VersionTable};
pub use types::{
    ArrowContainerDto, ArrowHeadCombinationDto, CURRENT_SCHEMA_VERSION, ContainerDto,
    DecimalDto, DocumentDto, EllipseContainerDto, EmojiContainerDto, FieldDto, FieldValueDto,
    FreehandContainerDto, HighlightContainerDto, ImageContainerDto, LineContainerDto,
    MAGIC_BYTES, MIN_SUPPORTED_SCHEMA_VERSION, MetaInformationDto, MetafileContainerDto,
    ObfuscateContainerDto, PointDto, PreparedFilterDto, RectangleContainerDto,
    SpeechbubbleContainerDto, StepLabelContainerDto, SvgContainerDto, TextAlignmentDto,
    TextContainerDto,
};
