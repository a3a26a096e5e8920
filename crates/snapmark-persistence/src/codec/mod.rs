//! Conversion between the live model and the DTO tree.
//!
//! The codec is layered leaf-first:
//!
//! - `value` - a single [`FieldValue`](snapmark_model::FieldValue)
//! - `field` - one field, and a container's whole field set
//! - per-kind container codecs (`shapes`, `filters`, `text`, `graphics`)
//! - `container` - dispatch over [`Container`](snapmark_model::Container) and lists of them
//! - `document` - the public [`DocumentCodec`] entry point
//!
//! Encoding only reads the model; decoding builds fresh model objects that
//! the caller owns. Neither direction keeps any state between calls.

mod container;
mod document;
mod field;
mod filters;
mod graphics;
mod shapes;
mod text;
mod value;

pub use container::{
    decode_container, decode_container_list, encode_container, encode_container_list,
};
pub use document::DocumentCodec;
pub use field::{decode_field, encode_field};
pub use value::{decode_value, encode_dyn_value, encode_value};

use crate::asset::AssetCodec;
use crate::error::Result;
use crate::options::CodecOptions;
use crate::registry::VersionRegistry;

/// Everything an encoder needs besides the value being encoded.
#[derive(Clone, Copy)]
pub struct EncodeContext<'a> {
    pub assets: &'a dyn AssetCodec,
}

impl<'a> EncodeContext<'a> {
    pub fn new(assets: &'a dyn AssetCodec) -> Self {
        Self { assets }
    }
}

/// Everything a decoder needs besides the DTO being decoded.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    pub registry: &'a VersionRegistry,
    pub assets: &'a dyn AssetCodec,
    pub options: &'a CodecOptions,

    /// Schema version declared by the document being decoded.
    pub source_version: u32,
}

impl<'a> DecodeContext<'a> {
    pub fn new(
        registry: &'a VersionRegistry,
        assets: &'a dyn AssetCodec,
        options: &'a CodecOptions,
        source_version: u32,
    ) -> Self {
        Self {
            registry,
            assets,
            options,
            source_version,
        }
    }
}

/// Types that can be converted to a DTO.
pub trait EncodeDto {
    /// The DTO type.
    type Dto;

    /// Convert to a DTO for persistence.
    fn encode_dto(&self, ctx: &EncodeContext<'_>) -> Result<Self::Dto>;
}

/// Types that can be rebuilt from a DTO.
pub trait DecodeDto: Sized {
    /// The DTO type.
    type Dto;

    /// Rebuild a live object from a DTO.
    fn decode_dto(dto: Self::Dto, ctx: &DecodeContext<'_>) -> Result<Self>;
}
