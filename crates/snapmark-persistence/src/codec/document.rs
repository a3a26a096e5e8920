//! Document codec, the public entry point.

use snapmark_model::{AssetKind, Container, Document};

use super::container::{decode_container_list, encode_container_list};
use super::graphics::{decode_asset, encode_asset};
use super::{DecodeContext, EncodeContext};
use crate::asset::AssetCodec;
use crate::error::Result;
use crate::options::CodecOptions;
use crate::registry::VersionRegistry;
use crate::types::{ContainerDto, DocumentDto, MetaInformationDto};

/// Converts whole documents to and from their DTO tree.
///
/// The codec borrows its registry and asset codec and keeps no state of its
/// own, so one instance can serve any number of threads.
#[derive(Clone)]
pub struct DocumentCodec<'a> {
    registry: &'a VersionRegistry,
    assets: &'a dyn AssetCodec,
    options: CodecOptions,
}

impl<'a> DocumentCodec<'a> {
    pub fn new(registry: &'a VersionRegistry, assets: &'a dyn AssetCodec) -> Self {
        Self {
            registry,
            assets,
            options: CodecOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &'a VersionRegistry {
        self.registry
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode a document, stamping the current schema version.
    ///
    /// `None` encodes to `None`. Any failure aborts the whole document.
    pub fn encode(&self, document: Option<&Document>) -> Result<Option<DocumentDto>> {
        let Some(document) = document else {
            return Ok(None);
        };

        let ctx = EncodeContext::new(self.assets);

        let mut meta_information = MetaInformationDto::new(self.registry.current());
        if self.options.stamp_saved_at {
            meta_information.saved_at = Some(chrono::Utc::now().to_rfc3339());
        }

        let image = encode_asset("document", &document.image, &ctx)?;
        let container_list = encode_container_list(Some(document.containers()), &ctx)?
            .unwrap_or_default();

        tracing::info!(
            version = meta_information.schema_version,
            containers = container_list.len(),
            "Encoded document"
        );

        Ok(Some(DocumentDto {
            meta_information,
            image,
            container_list,
        }))
    }

    /// Decode a document.
    ///
    /// The declared schema version is checked before anything else is
    /// touched. Fields the document lacks are backfilled from the current
    /// defaults, and the result carries the current schema version.
    pub fn decode(&self, dto: DocumentDto) -> Result<Document> {
        let source_version = dto.meta_information.schema_version;
        self.registry.check(source_version)?;

        let ctx = DecodeContext::new(self.registry, self.assets, &self.options, source_version);

        let image = decode_asset("document", AssetKind::Raster, &dto.image, &ctx)?;
        let containers = decode_container_list(dto.container_list, &ctx)?;

        tracing::info!(
            version = source_version,
            containers = containers.len(),
            "Decoded document"
        );

        Ok(Document {
            schema_version: self.registry.current(),
            image,
            containers,
        })
    }

    /// Encode a container list on its own, keeping paint order.
    pub fn encode_list(
        &self,
        containers: Option<&[Container]>,
    ) -> Result<Option<Vec<ContainerDto>>> {
        encode_container_list(containers, &EncodeContext::new(self.assets))
    }

    /// Decode a container list written under `source_version`.
    pub fn decode_list(
        &self,
        dtos: Vec<ContainerDto>,
        source_version: u32,
    ) -> Result<Vec<Container>> {
        self.registry.check(source_version)?;
        let ctx = DecodeContext::new(self.registry, self.assets, &self.options, source_version);
        decode_container_list(dtos, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::DigestAssetCodec;
    use crate::error::CodecError;
    use snapmark_model::{Asset, Bounds, LineContainer};

    fn sample_document() -> Document {
        let mut document = Document::new(Asset::raster(vec![0x89, b'P', b'N', b'G', 1, 2, 3]));
        document.push(LineContainer::new(Bounds::new(10, 20, 100, 50)));
        document
    }

    #[test]
    fn test_encode_none() {
        let registry = VersionRegistry::builtin();
        let assets = DigestAssetCodec::new();
        let codec = DocumentCodec::new(&registry, &assets);

        assert!(codec.encode(None).unwrap().is_none());
    }

    #[test]
    fn test_encode_stamps_version_and_time() {
        let registry = VersionRegistry::builtin();
        let assets = DigestAssetCodec::new();
        let codec = DocumentCodec::new(&registry, &assets);

        let dto = codec.encode(Some(&sample_document())).unwrap().unwrap();
        assert_eq!(dto.meta_information.schema_version, registry.current());
        assert!(dto.meta_information.saved_at.is_some());
    }

    #[test]
    fn test_saved_at_can_be_disabled() {
        let registry = VersionRegistry::builtin();
        let assets = DigestAssetCodec::new();
        let options = CodecOptions {
            stamp_saved_at: false,
            ..Default::default()
        };
        let codec = DocumentCodec::new(&registry, &assets).with_options(options);

        let dto = codec.encode(Some(&sample_document())).unwrap().unwrap();
        assert_eq!(dto.meta_information.saved_at, None);
    }

    #[test]
    fn test_decode_stamps_current_version() {
        let registry = VersionRegistry::builtin();
        let assets = DigestAssetCodec::new();
        let codec = DocumentCodec::new(&registry, &assets);

        let mut dto = codec.encode(Some(&sample_document())).unwrap().unwrap();
        dto.meta_information.schema_version = 1;

        let document = codec.decode(dto).unwrap();
        assert_eq!(document.schema_version, registry.current());
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_decode_rejects_unsupported_version() {
        let registry = VersionRegistry::builtin();
        let assets = DigestAssetCodec::new();
        let codec = DocumentCodec::new(&registry, &assets);

        let mut dto = codec.encode(Some(&sample_document())).unwrap().unwrap();
        dto.meta_information.schema_version = 99;

        assert!(matches!(
            codec.decode(dto),
            Err(CodecError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_decode_list_checks_version() {
        let registry = VersionRegistry::builtin();
        let assets = DigestAssetCodec::new();
        let codec = DocumentCodec::new(&registry, &assets);

        assert!(matches!(
            codec.decode_list(Vec::new(), 0),
            Err(CodecError::UnsupportedVersion { found: 0, .. })
        ));
        assert!(codec.decode_list(Vec::new(), 1).unwrap().is_empty());
    }
}
