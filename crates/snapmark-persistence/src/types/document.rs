//! Root document DTO.

use rkyv::{Archive, Deserialize, Serialize};

use super::ContainerDto;

/// Root persisted document.
///
/// This is the top-level type handed to the byte-level writer.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct DocumentDto {
    /// Versioning and save metadata.
    pub meta_information: MetaInformationDto,

    /// Encoded base image, as produced by the asset codec.
    pub image: Vec<u8>,

    /// Containers in paint order.
    pub container_list: Vec<ContainerDto>,
}

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct MetaInformationDto {
    /// Schema version the document was written with.
    pub schema_version: u32,

    /// When the document was encoded (RFC 3339), if stamping was enabled.
    pub saved_at: Option<String>,
}

impl MetaInformationDto {
    pub fn new(schema_version: u32) -> Self {
        Self {
            schema_version,
            saved_at: None,
        }
    }
}
