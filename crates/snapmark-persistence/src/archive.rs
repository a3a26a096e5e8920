//! Byte envelope around an archived DTO tree.
//!
//! Nothing here touches the filesystem; writing the bytes somewhere is up to
//! the caller.

use rkyv::util::AlignedVec;

use crate::error::{CodecError, Result};
use crate::registry::VersionRegistry;
use crate::types::{DocumentDto, MAGIC_BYTES};

/// Magic (4) + schema version (4).
const HEADER_LEN: usize = 8;

/// Archive a DTO tree.
///
/// Format:
/// - 4 bytes: Magic ("SMK\x01")
/// - 4 bytes: Schema version (u32 little-endian), copied from the DTO
/// - N bytes: rkyv payload
pub fn to_archive_bytes(dto: &DocumentDto) -> Result<Vec<u8>> {
    let payload = rkyv::to_bytes::<rkyv::rancor::Error>(dto).map_err(|e| {
        CodecError::Serialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv serialization failed: {e}"
            ))),
        }
    })?;

    let mut output = Vec::with_capacity(HEADER_LEN + payload.len());
    output.extend_from_slice(&MAGIC_BYTES);
    output.extend_from_slice(&dto.meta_information.schema_version.to_le_bytes());
    output.extend_from_slice(&payload);

    tracing::debug!(bytes = output.len(), "Archived document");
    Ok(output)
}

/// Read a DTO tree back from archived bytes.
///
/// The header version goes through the registry's version gate before the
/// payload is looked at.
pub fn from_archive_bytes(bytes: &[u8], registry: &VersionRegistry) -> Result<DocumentDto> {
    if bytes.len() <= HEADER_LEN {
        return Err(CodecError::InvalidFormat {
            reason: format!("archive too small ({} bytes)", bytes.len()),
        });
    }

    if bytes[0..4] != MAGIC_BYTES {
        return Err(CodecError::InvalidFormat {
            reason: "invalid magic bytes".to_string(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    registry.check(version)?;

    // The payload sits at an arbitrary offset in the caller's buffer; rkyv
    // needs it aligned.
    let payload = &bytes[HEADER_LEN..];
    let mut aligned = AlignedVec::<16>::with_capacity(payload.len());
    aligned.extend_from_slice(payload);

    let dto = rkyv::from_bytes::<DocumentDto, rkyv::rancor::Error>(&aligned).map_err(|e| {
        CodecError::Deserialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv deserialization failed: {e}"
            ))),
        }
    })?;

    if dto.meta_information.schema_version != version {
        return Err(CodecError::InvalidFormat {
            reason: format!(
                "header version {version} does not match document version {}",
                dto.meta_information.schema_version
            ),
        });
    }

    Ok(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ContainerDto, FieldDto, FieldValueDto, LineContainerDto, MetaInformationDto,
    };

    fn sample_dto() -> DocumentDto {
        DocumentDto {
            meta_information: MetaInformationDto::new(2),
            image: vec![7u8; 40],
            container_list: vec![ContainerDto::Line(LineContainerDto {
                left: 10,
                top: 20,
                width: 100,
                height: 50,
                fields: vec![FieldDto {
                    field_kind_name: "LINE_THICKNESS".to_string(),
                    scope: "LineContainer".to_string(),
                    value: FieldValueDto::Int(2),
                }],
            })],
        }
    }

    #[test]
    fn test_archive_round_trip() {
        let registry = VersionRegistry::builtin();
        let dto = sample_dto();

        let bytes = to_archive_bytes(&dto).unwrap();
        assert_eq!(&bytes[0..4], &MAGIC_BYTES);
        assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 2);

        let restored = from_archive_bytes(&bytes, &registry).unwrap();
        assert_eq!(restored, dto);
    }

    #[test]
    fn test_invalid_magic() {
        let registry = VersionRegistry::builtin();
        let result = from_archive_bytes(b"NOT_A_SNAPMARK_DOCUMENT", &registry);
        assert!(matches!(result, Err(CodecError::InvalidFormat { .. })));
    }

    #[test]
    fn test_too_small() {
        let registry = VersionRegistry::builtin();
        let result = from_archive_bytes(&MAGIC_BYTES, &registry);
        assert!(matches!(result, Err(CodecError::InvalidFormat { .. })));
    }

    #[test]
    fn test_unsupported_header_version() {
        let registry = VersionRegistry::builtin();

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC_BYTES);
        bytes.extend_from_slice(&999u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 100]);

        assert!(matches!(
            from_archive_bytes(&bytes, &registry),
            Err(CodecError::UnsupportedVersion { found: 999, .. })
        ));
    }

    #[test]
    fn test_header_must_match_document_version() {
        let registry = VersionRegistry::builtin();

        let mut bytes = to_archive_bytes(&sample_dto()).unwrap();
        bytes[4..8].copy_from_slice(&1u32.to_le_bytes());

        assert!(matches!(
            from_archive_bytes(&bytes, &registry),
            Err(CodecError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_garbage_payload() {
        let registry = VersionRegistry::builtin();

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC_BYTES);
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xFFu8; 3]);

        assert!(matches!(
            from_archive_bytes(&bytes, &registry),
            Err(CodecError::Deserialization { .. })
        ));
    }
}
