//! Embedded asset encoding.
//!
//! The codec treats assets as opaque: it hands them to an [`AssetCodec`] and
//! stores whatever bytes come back. Detecting corrupt or truncated payloads
//! is the asset codec's job; the document codec only propagates its errors.

use sha2::{Digest, Sha256};
use snapmark_model::{Asset, AssetKind};
use thiserror::Error;

/// Asset codec error.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset has no bytes.
    #[error("{kind} asset is empty")]
    Empty { kind: &'static str },

    /// The encoded payload is shorter than its framing requires.
    #[error("{kind} asset payload is truncated ({len} bytes)")]
    Truncated { kind: &'static str, len: usize },

    /// The payload does not match the digest stored with it.
    #[error("{kind} asset digest mismatch (expected {expected}, found {actual})")]
    DigestMismatch {
        kind: &'static str,
        expected: String,
        actual: String,
    },

    /// Failure reported by a host-provided asset codec.
    #[error("{kind} asset codec failed")]
    Codec {
        kind: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Turns assets into persisted bytes and back.
///
/// Implementations must be lossless: `decode(kind, encode(asset))` yields an
/// asset with the same bytes.
pub trait AssetCodec: Send + Sync {
    fn encode(&self, asset: &Asset) -> Result<Vec<u8>, AssetError>;

    fn decode(&self, kind: AssetKind, bytes: &[u8]) -> Result<Asset, AssetError>;
}

/// Length of the SHA-256 digest prefix.
const DIGEST_LEN: usize = 32;

/// Default asset codec: prefixes the payload with its SHA-256 digest.
///
/// Format:
///
/// ```text
/// +------------------+
/// | SHA-256 digest   | 32 bytes
/// +------------------+
/// | Payload          | Variable - the asset bytes, unchanged
/// +------------------+
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestAssetCodec;

impl DigestAssetCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AssetCodec for DigestAssetCodec {
    fn encode(&self, asset: &Asset) -> Result<Vec<u8>, AssetError> {
        if asset.is_empty() {
            return Err(AssetError::Empty {
                kind: asset.kind().as_str(),
            });
        }

        let digest = Sha256::digest(asset.bytes());

        let mut output = Vec::with_capacity(DIGEST_LEN + asset.len());
        output.extend_from_slice(&digest);
        output.extend_from_slice(asset.bytes());
        Ok(output)
    }

    fn decode(&self, kind: AssetKind, bytes: &[u8]) -> Result<Asset, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::Empty {
                kind: kind.as_str(),
            });
        }
        if bytes.len() <= DIGEST_LEN {
            return Err(AssetError::Truncated {
                kind: kind.as_str(),
                len: bytes.len(),
            });
        }

        let (stored, payload) = bytes.split_at(DIGEST_LEN);
        let actual = Sha256::digest(payload);

        if actual.as_slice() != stored {
            return Err(AssetError::DigestMismatch {
                kind: kind.as_str(),
                expected: hex::encode(stored),
                actual: hex::encode(actual),
            });
        }

        Ok(Asset::new(kind, payload))
    }
}
