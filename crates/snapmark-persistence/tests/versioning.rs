//! Schema version gate, backfill and error propagation.

use snapmark_model::{
    Asset, AssetKind, Bounds, Container, Document, Drawable, FieldKind, FieldValue, ImageContainer,
    ObfuscateContainer, StepLabelContainer, TextAlignment, TextContainer, default_field_set,
};
use snapmark_persistence::{
    AssetCodec, AssetError, CodecError, CodecOptions, ContainerDto, DigestAssetCodec,
    DocumentCodec, DocumentDto, FieldDto, FieldValueDto, MIN_SUPPORTED_SCHEMA_VERSION,
    VersionRegistry,
};

/// Field names a schema version 1 writer did not know about.
const ADDED_IN_V2: [&str; 4] = [
    "TEXT_HORIZONTAL_ALIGNMENT",
    "TEXT_VERTICAL_ALIGNMENT",
    "FLAGS",
    "PREVIEW_QUALITY",
];

/// Encode `document` and rewrite it the way a version 1 writer would have.
fn as_version_1(codec: &DocumentCodec<'_>, document: &Document) -> DocumentDto {
    let mut dto = codec
        .encode(Some(document))
        .expect("encode")
        .expect("document given");
    dto.meta_information.schema_version = MIN_SUPPORTED_SCHEMA_VERSION;

    for container in &mut dto.container_list {
        let fields = match container {
            ContainerDto::Text(text) => &mut text.fields,
            ContainerDto::StepLabel(label) => &mut label.fields,
            ContainerDto::Obfuscate(obfuscate) => &mut obfuscate.fields,
            _ => continue,
        };
        fields.retain(|field| !ADDED_IN_V2.contains(&field.field_kind_name.as_str()));
    }
    dto
}

fn sample_document() -> Document {
    let mut document = Document::new(Asset::raster(vec![1, 2, 3, 4, 5]));
    document.push(TextContainer::new(Bounds::new(0, 0, 100, 20), "Caption"));
    document.push(StepLabelContainer::new(Bounds::new(40, 40, 24, 24), 1, 1));
    document.push(ObfuscateContainer::new(Bounds::new(0, 50, 80, 30)));
    document
}

#[test]
fn version_1_documents_are_backfilled() {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);

    let dto = as_version_1(&codec, &sample_document());
    let loaded = codec.decode(dto).expect("decode");

    assert_eq!(loaded.schema_version, registry.current());
    for container in loaded.containers() {
        assert!(
            container
                .fields()
                .same_values(&default_field_set(container.kind())),
            "{} was not backfilled",
            container.kind()
        );
    }

    let text = &loaded.containers()[0];
    assert_eq!(
        text.fields().value(FieldKind::TextHorizontalAlignment),
        Some(&FieldValue::TextAlignment(TextAlignment::Center))
    );
}

#[test]
fn backfill_keeps_persisted_values() {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);

    let mut document = Document::new(Asset::raster(vec![9; 16]));
    let mut text = TextContainer::new(Bounds::new(0, 0, 10, 10), "Big");
    text.set_field(FieldKind::FontSize, 48.0f32);
    document.push(text);

    let loaded = codec
        .decode(as_version_1(&codec, &document))
        .expect("decode");
    assert_eq!(
        loaded.containers()[0].fields().value(FieldKind::FontSize),
        Some(&FieldValue::F32(48.0))
    );
}

#[test]
fn versions_outside_the_range_fail_whole() {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);

    for version in [0, registry.max_supported() + 1, u32::MAX] {
        let mut dto = codec
            .encode(Some(&sample_document()))
            .expect("encode")
            .expect("document given");
        dto.meta_information.schema_version = version;

        match codec.decode(dto) {
            Err(CodecError::UnsupportedVersion {
                found,
                min_supported,
                max_supported,
            }) => {
                assert_eq!(found, version);
                assert_eq!(min_supported, 1);
                assert_eq!(max_supported, 2);
            }
            other => panic!("version {version}: expected UnsupportedVersion, got {other:?}"),
        }
    }
}

#[test]
fn unknown_field_kinds_follow_options() {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let strict = DocumentCodec::new(&registry, &assets);
    let lenient = DocumentCodec::new(&registry, &assets).with_options(CodecOptions::lenient());

    let mut dto = strict
        .encode(Some(&sample_document()))
        .expect("encode")
        .expect("document given");
    if let ContainerDto::Text(text) = &mut dto.container_list[0] {
        text.fields.push(FieldDto {
            field_kind_name: "GLOW_RADIUS".to_string(),
            scope: "TextContainer".to_string(),
            value: FieldValueDto::Int(3),
        });
    }

    assert!(matches!(
        strict.decode(dto.clone()),
        Err(CodecError::UnknownFieldKind { name }) if name == "GLOW_RADIUS"
    ));

    let loaded = lenient.decode(dto).expect("lenient decode");
    assert_eq!(loaded.len(), 3);
    assert!(
        loaded.containers()[0]
            .fields()
            .same_values(&default_field_set(loaded.containers()[0].kind()))
    );
}

#[test]
fn options_load_from_partial_settings() {
    let options: CodecOptions =
        serde_json::from_str(r#"{ "strict_field_kinds": false }"#).expect("options");
    assert!(!options.strict_field_kinds);
    assert!(options.stamp_saved_at);
}

/// Asset codec that refuses everything, like a host whose image encoder broke.
struct BrokenAssets;

impl AssetCodec for BrokenAssets {
    fn encode(&self, asset: &Asset) -> Result<Vec<u8>, AssetError> {
        Err(AssetError::Codec {
            kind: asset.kind().as_str(),
            source: "encoder unavailable".into(),
        })
    }

    fn decode(&self, kind: AssetKind, _bytes: &[u8]) -> Result<Asset, AssetError> {
        Err(AssetError::Codec {
            kind: kind.as_str(),
            source: "decoder unavailable".into(),
        })
    }
}

#[test]
fn asset_failures_abort_the_document() {
    let registry = VersionRegistry::builtin();
    let broken = BrokenAssets;
    let codec = DocumentCodec::new(&registry, &broken);

    let result = codec.encode(Some(&sample_document()));
    assert!(matches!(
        result,
        Err(CodecError::Asset {
            owner: "document",
            source: AssetError::Codec { .. }
        })
    ));
}

#[test]
fn truncated_container_asset_is_reported() {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);

    let mut document = Document::new(Asset::raster(vec![1; 8]));
    document.push(ImageContainer::new(
        Bounds::new(0, 0, 4, 4),
        Asset::raster(vec![0xAB; 48]),
    ));

    let mut dto = codec
        .encode(Some(&document))
        .expect("encode")
        .expect("document given");
    if let ContainerDto::Image(image) = &mut dto.container_list[0] {
        image.image.truncate(20);
    }

    let result = codec.decode(dto);
    assert!(matches!(
        result,
        Err(CodecError::Asset {
            owner: "image container",
            source: AssetError::Truncated { len: 20, .. }
        })
    ));
}

#[test]
fn decode_list_backfills_like_decode() {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);

    let label: Container = StepLabelContainer::new(Bounds::new(1, 1, 9, 9), 2, 1).into();
    let mut dtos = codec
        .encode_list(Some(std::slice::from_ref(&label)))
        .expect("encode")
        .expect("list given");
    if let ContainerDto::StepLabel(dto) = &mut dtos[0] {
        dto.fields.retain(|field| field.field_kind_name != "FLAGS");
    }

    let decoded = codec
        .decode_list(dtos, MIN_SUPPORTED_SCHEMA_VERSION)
        .expect("decode");
    assert!(decoded[0].same_content(&label));
}
