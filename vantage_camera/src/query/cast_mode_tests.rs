use glam::Vec3;
use slotmap::SlotMap;
use crate::error::Error;
use crate::query::mock_geometry::MockGeometry;
use crate::query::SurfaceId;
use super::*;

fn surface() -> SurfaceId {
    let mut ids: SlotMap<SurfaceId, ()> = SlotMap::with_key();
    ids.insert(())
}

#[test]
fn test_default_is_ray() {
    assert_eq!(CastMode::default(), CastMode::Ray);
    assert_eq!(CastMode::Ray.radius(), None);
}

#[test]
fn test_sphere_radius() {
    assert_eq!(CastMode::sphere(0.25).radius(), Some(0.25));
}

#[test]
fn test_validate() {
    assert!(CastMode::Ray.validate().is_ok());
    assert!(CastMode::sphere(0.1).validate().is_ok());
    assert!(matches!(CastMode::sphere(0.0).validate(), Err(Error::InvalidConfiguration(_))));
    assert!(matches!(CastMode::sphere(-0.5).validate(), Err(Error::InvalidConfiguration(_))));
    assert!(matches!(CastMode::sphere(f32::NAN).validate(), Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_ray_mode_dispatches_to_cast_ray() {
    let id = surface();
    let geometry = MockGeometry::hitting(id, Vec3::new(0.0, 0.0, -3.0), 3.0);

    let hit = CastMode::Ray
        .cast(&geometry, Vec3::ZERO, Vec3::NEG_Z, 100.0, LayerMask::ALL)
        .unwrap();

    assert_eq!(hit.map(|h| h.surface), Some(id));
    assert_eq!(geometry.ray_count(), 1);
    assert_eq!(geometry.sphere_count(), 0);
}

#[test]
fn test_sphere_mode_dispatches_with_radius() {
    let geometry = MockGeometry::new();

    let hit = CastMode::sphere(0.75)
        .cast(&geometry, Vec3::ZERO, Vec3::X, 50.0, LayerMask::DEFAULT)
        .unwrap();

    assert!(hit.is_none());
    let calls = geometry.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].radius, Some(0.75));
    assert_eq!(calls[0].max_distance, 50.0);
    assert_eq!(calls[0].filter, LayerMask::DEFAULT);
    assert_eq!(calls[0].direction, Vec3::X);
}

#[test]
fn test_cast_propagates_backend_error() {
    let geometry = MockGeometry::failing("backend offline");

    let result = CastMode::Ray.cast(&geometry, Vec3::ZERO, Vec3::X, 10.0, LayerMask::ALL);

    assert_eq!(result, Err(Error::QueryFailed("backend offline".to_string())));
}

#[test]
fn test_surface_id_raw_roundtrip() {
    let id = surface();
    assert_eq!(SurfaceId::from_raw(id.to_raw()), id);
}
