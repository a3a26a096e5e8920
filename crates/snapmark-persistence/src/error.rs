//! Codec error types.
//!
//! Every hard failure aborts the whole conversion: no partially converted
//! document or DTO tree is ever returned alongside an error.

use std::any::TypeId;

use snapmark_model::ModelError;
use thiserror::Error;

use crate::asset::AssetError;

/// Document codec error.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A field value's runtime type is outside the supported value set.
    #[error("Unsupported field value type: {type_id:?}")]
    TypeMismatch { type_id: TypeId },

    /// The document declares a schema version outside the supported range.
    #[error(
        "Document schema version {found} is not supported (supported: {min_supported} to {max_supported})"
    )]
    UnsupportedVersion {
        found: u32,
        min_supported: u32,
        max_supported: u32,
    },

    /// A persisted field kind name is not known to this build.
    #[error("Unknown field kind: {name}")]
    UnknownFieldKind { name: String },

    /// A persisted value is structurally valid but out of range.
    #[error("Invalid value for field {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// The asset codec failed on an embedded asset.
    #[error("Failed to convert embedded {owner} asset")]
    Asset {
        owner: &'static str,
        #[source]
        source: AssetError,
    },

    /// Archived bytes are not a document archive.
    #[error("Invalid document archive: {reason}")]
    InvalidFormat { reason: String },

    /// Archiving the DTO tree failed.
    #[error("Failed to serialize document data")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading the DTO tree back from an archive failed.
    #[error("Failed to deserialize document data")]
    Deserialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CodecError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::TypeMismatch { .. } => {
                "One of the shapes has a setting that cannot be saved.".to_string()
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                if found > max_supported {
                    format!(
                        "This file was created with a newer version of Snapmark \
                        (file version {found}, your version supports up to {max_supported}). \
                        Please update the application."
                    )
                } else {
                    format!(
                        "This file uses an old format (version {found}) that is no longer supported."
                    )
                }
            }
            Self::UnknownFieldKind { name } => {
                format!("The file contains a shape setting this version does not know: {name}")
            }
            Self::InvalidValue { field, .. } => {
                format!("The file contains an invalid value for the shape setting {field}.")
            }
            Self::Asset { owner, .. } => {
                format!("An embedded {owner} picture could not be read or written.")
            }
            Self::InvalidFormat { .. } => "The file is not a Snapmark document.".to_string(),
            Self::Serialization { .. } => {
                "An error occurred while saving the document.".to_string()
            }
            Self::Deserialization { .. } => {
                "An error occurred while reading the document. The file may be corrupted."
                    .to_string()
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } if found > max_supported => {
                Some("Download the latest version from the Snapmark website.".into())
            }
            Self::UnsupportedVersion { .. } => {
                Some("Open and re-save the file with an older release first.".into())
            }
            Self::UnknownFieldKind { .. } => Some(
                "Update Snapmark, or disable strict field checking to skip unknown settings."
                    .into(),
            ),
            Self::Asset { .. } | Self::Deserialization { .. } | Self::InvalidValue { .. } => {
                Some("Try opening a backup if you have one.".into())
            }
            Self::InvalidFormat { .. } => Some("Make sure you selected a Snapmark file.".into()),
            Self::TypeMismatch { .. } | Self::Serialization { .. } => None,
        }
    }
}

impl From<ModelError> for CodecError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnsupportedValueType { type_id } => Self::TypeMismatch { type_id },
            ModelError::UnknownFieldKind(name) => Self::UnknownFieldKind { name },
            ModelError::InvalidDecimal(literal) => Self::InvalidValue {
                field: "decimal".to_string(),
                reason: format!("invalid literal {literal}"),
            },
        }
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_version_suggests_update() {
        let err = CodecError::UnsupportedVersion {
            found: 9,
            min_supported: 1,
            max_supported: 2,
        };
        assert!(err.user_message().contains("newer version"));
        assert!(err.suggestion().unwrap().contains("latest version"));
    }

    #[test]
    fn test_older_version_message() {
        let err = CodecError::UnsupportedVersion {
            found: 0,
            min_supported: 1,
            max_supported: 2,
        };
        assert!(err.user_message().contains("old format"));
        assert!(err.suggestion().unwrap().contains("older release"));
    }
}
