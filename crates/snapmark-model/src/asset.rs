//! Embedded binary payloads.

use serde::{Deserialize, Serialize};

/// What an embedded asset's bytes contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Encoded raster image (PNG, JPEG, ...).
    Raster,
    /// Windows metafile.
    Metafile,
    /// SVG document.
    Svg,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Raster => "raster",
            AssetKind::Metafile => "metafile",
            AssetKind::Svg => "svg",
        }
    }
}

/// An opaque embedded payload owned by a document or container.
///
/// The model never looks inside the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    kind: AssetKind,
    bytes: Vec<u8>,
}

impl Asset {
    pub fn new(kind: AssetKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }

    pub fn raster(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(AssetKind::Raster, bytes)
    }

    pub fn metafile(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(AssetKind::Metafile, bytes)
    }

    pub fn svg(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(AssetKind::Svg, bytes)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
