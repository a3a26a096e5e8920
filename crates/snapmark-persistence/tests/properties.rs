//! Property tests for geometry and point sequences.

use proptest::prelude::*;

use snapmark_model::{
    Bounds, Container, ContainerKind, EllipseContainer, FreehandContainer, LineContainer, Point,
    RectangleContainer, TextContainer,
};
use snapmark_persistence::{
    CURRENT_SCHEMA_VERSION, ContainerDto, DigestAssetCodec, DocumentCodec, VersionRegistry,
};

// ===================
// Strategies
// ===================

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>())
        .prop_map(|(left, top, width, height)| Bounds::new(left, top, width, height))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-10_000i32..10_000, -10_000i32..10_000).prop_map(|(x, y)| Point::new(x, y))
}

fn kind_strategy() -> impl Strategy<Value = ContainerKind> {
    prop::sample::select(vec![
        ContainerKind::Line,
        ContainerKind::Rectangle,
        ContainerKind::Ellipse,
        ContainerKind::Text,
    ])
}

fn container(kind: ContainerKind, bounds: Bounds) -> Container {
    match kind {
        ContainerKind::Rectangle => RectangleContainer::new(bounds).into(),
        ContainerKind::Ellipse => EllipseContainer::new(bounds).into(),
        ContainerKind::Text => TextContainer::new(bounds, "label").into(),
        _ => LineContainer::new(bounds).into(),
    }
}

fn round_trip(containers: &[Container]) -> Vec<Container> {
    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);

    let dtos = codec
        .encode_list(Some(containers))
        .expect("encode")
        .expect("list given");
    codec
        .decode_list(dtos, CURRENT_SCHEMA_VERSION)
        .expect("decode")
}

// ===================
// Property Test Functions
// ===================

/// Geometry comes back exactly, including negative sizes.
fn check_geometry_round_trip(kind: ContainerKind, bounds: Bounds) -> Result<(), TestCaseError> {
    let decoded = round_trip(&[container(kind, bounds)]);

    prop_assert_eq!(decoded.len(), 1);
    prop_assert_eq!(decoded[0].kind(), kind);
    prop_assert_eq!(decoded[0].bounds(), bounds);
    Ok(())
}

/// N points come back as the same N points in the same order.
fn check_freehand_points(points: &[Point]) -> Result<(), TestCaseError> {
    let freehand: Container =
        FreehandContainer::new(Bounds::new(0, 0, 50, 50), points.to_vec()).into();

    let registry = VersionRegistry::builtin();
    let assets = DigestAssetCodec::new();
    let codec = DocumentCodec::new(&registry, &assets);
    let dtos = codec
        .encode_list(Some(std::slice::from_ref(&freehand)))
        .expect("encode")
        .expect("list given");

    match &dtos[0] {
        ContainerDto::Freehand(dto) => {
            prop_assert_eq!(dto.capture_points.len(), points.len());
        }
        other => return Err(TestCaseError::fail(format!("got {}", other.kind_name()))),
    }

    let decoded = codec
        .decode_list(dtos, CURRENT_SCHEMA_VERSION)
        .expect("decode");
    match &decoded[0] {
        Container::Freehand(decoded) => {
            prop_assert_eq!(decoded.points(), points);
        }
        other => return Err(TestCaseError::fail(format!("got {}", other.kind()))),
    }
    Ok(())
}

/// A list of containers keeps its order and length.
fn check_list_order(items: &[(ContainerKind, Bounds)]) -> Result<(), TestCaseError> {
    let containers: Vec<Container> = items
        .iter()
        .map(|(kind, bounds)| container(*kind, *bounds))
        .collect();

    let decoded = round_trip(&containers);

    prop_assert_eq!(decoded.len(), containers.len());
    for (original, decoded) in containers.iter().zip(&decoded) {
        prop_assert!(original.same_content(decoded));
    }
    Ok(())
}

proptest! {
    #[test]
    fn geometry_round_trip(kind in kind_strategy(), bounds in bounds_strategy()) {
        check_geometry_round_trip(kind, bounds)?;
    }

    #[test]
    fn freehand_points_round_trip(points in prop::collection::vec(point_strategy(), 0..64)) {
        check_freehand_points(&points)?;
    }

    #[test]
    fn list_order_is_kept(
        items in prop::collection::vec((kind_strategy(), bounds_strategy()), 0..12)
    ) {
        check_list_order(&items)?;
    }
}
