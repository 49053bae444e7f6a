use glam::Vec3;
use slotmap::SlotMap;
use crate::camera::{Camera, Projection};
use crate::config::SelectorConfig;
use crate::error::Error;
use crate::query::mock_geometry::MockGeometry;
use crate::query::{CastMode, LayerMask, QueryHit, SurfaceId};
use crate::visibility::{ProbeOutcome, ProbeRecorder};
use super::*;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Two distinct surface ids: (target, wall)
fn surfaces() -> (SurfaceId, SurfaceId) {
    let mut ids: SlotMap<SurfaceId, ()> = SlotMap::with_key();
    (ids.insert(()), ids.insert(()))
}

fn camera_facing_origin() -> Camera {
    Camera::looking_at(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::ZERO,
        Vec3::Y,
        Projection::Perspective {
            fov_y: std::f32::consts::FRAC_PI_2,
            aspect: 1.0,
            near: 0.1,
            far: 200.0,
        },
    )
}

fn ray_tester() -> VisibilityTester {
    VisibilityTester::new(SelectorConfig::default()).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_rejects_invalid_config() {
    let config = SelectorConfig::default().with_cast_mode(CastMode::sphere(0.0));
    assert!(matches!(VisibilityTester::new(config), Err(Error::InvalidConfiguration(_))));
}

// ============================================================================
// Frustum stage
// ============================================================================

#[test]
fn test_outside_frustum_issues_no_cast() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::hitting(target_id, Vec3::ZERO, 10.0);
    let target = Target::new(target_id, Vec3::new(0.0, 0.0, 20.0)); // behind the camera

    let visibility = ray_tester().check(&geometry, &target, &camera_facing_origin()).unwrap();

    assert_eq!(visibility, Visibility::OutsideFrustum);
    assert_eq!(geometry.cast_count(), 0);
    assert_eq!(geometry.frustum_count(), 1);
}

#[test]
fn test_frustum_failure_propagates() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::failing_frustum("no camera data");
    let target = Target::new(target_id, Vec3::ZERO);

    let result = ray_tester().check(&geometry, &target, &camera_facing_origin());

    assert_eq!(result, Err(Error::QueryFailed("no camera data".to_string())));
    assert_eq!(geometry.cast_count(), 0);
}

// ============================================================================
// Cast stage
// ============================================================================

#[test]
fn test_hit_on_target_is_visible() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::hitting(target_id, Vec3::new(0.0, 0.0, 0.5), 9.5);
    let target = Target::new(target_id, Vec3::ZERO);

    let tester = ray_tester();
    assert_eq!(tester.check(&geometry, &target, &camera_facing_origin()).unwrap(), Visibility::Visible);
    assert!(tester.is_visible(&geometry, &target, &camera_facing_origin()).unwrap());
}

#[test]
fn test_hit_on_other_surface_is_occluded() {
    let (target_id, wall_id) = surfaces();
    let geometry = MockGeometry::hitting(wall_id, Vec3::new(0.0, 0.0, 5.0), 5.0);
    let target = Target::new(target_id, Vec3::ZERO);

    let visibility = ray_tester().check(&geometry, &target, &camera_facing_origin()).unwrap();

    assert_eq!(visibility, Visibility::Occluded(wall_id));
    assert!(!visibility.is_visible());
}

#[test]
fn test_no_hit_is_not_visible() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::new();
    let target = Target::new(target_id, Vec3::ZERO);

    let visibility = ray_tester().check(&geometry, &target, &camera_facing_origin()).unwrap();

    assert_eq!(visibility, Visibility::NoHit);
    assert_eq!(geometry.cast_count(), 1);
}

#[test]
fn test_cast_parameters() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::new();
    let target = Target::new(target_id, Vec3::new(0.0, 3.0, 0.0));
    let camera = camera_facing_origin();
    let config = SelectorConfig::default()
        .with_max_distance(42.0)
        .with_occlusion_filter(LayerMask::DEFAULT);

    VisibilityTester::new(config).unwrap().check(&geometry, &target, &camera).unwrap();

    let calls = geometry.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].origin, camera.position());
    let expected = (target.position - camera.position()).normalize();
    assert!((calls[0].direction - expected).length() < 1e-6);
    assert!((calls[0].direction.length() - 1.0).abs() < 1e-6);
    assert_eq!(calls[0].max_distance, 42.0);
    assert_eq!(calls[0].filter, LayerMask::DEFAULT);
    assert_eq!(calls[0].radius, None);
}

#[test]
fn test_sphere_mode_uses_sphere_cast() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::hitting(target_id, Vec3::new(0.0, 0.0, 0.5), 9.0);
    let target = Target::new(target_id, Vec3::ZERO);
    let config = SelectorConfig::default().with_cast_mode(CastMode::sphere(0.4));

    let visibility = VisibilityTester::new(config)
        .unwrap()
        .check(&geometry, &target, &camera_facing_origin())
        .unwrap();

    assert_eq!(visibility, Visibility::Visible);
    assert_eq!(geometry.ray_count(), 0);
    assert_eq!(geometry.calls()[0].radius, Some(0.4));
}

#[test]
fn test_query_failure_propagates() {
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::failing("physics thread died");
    let target = Target::new(target_id, Vec3::ZERO);

    let result = ray_tester().check(&geometry, &target, &camera_facing_origin());

    assert_eq!(result, Err(Error::QueryFailed("physics thread died".to_string())));
}

#[test]
fn test_camera_on_target_is_degenerate() {
    // Orthographic volume reaching behind the eye, so the eye itself is inside
    let camera = Camera::looking_at(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::ZERO,
        Vec3::Y,
        Projection::Orthographic { half_width: 5.0, half_height: 5.0, near: -1.0, far: 50.0 },
    );
    let (target_id, _) = surfaces();
    let geometry = MockGeometry::new();
    let target = Target::new(target_id, camera.position());

    let result = ray_tester().check(&geometry, &target, &camera);

    assert!(matches!(result, Err(Error::DegenerateDirection(_))));
    assert_eq!(geometry.cast_count(), 0);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_probe_reports_clear_segment() {
    let (target_id, _) = surfaces();
    let hit_point = Vec3::new(0.0, 0.0, 0.5);
    let geometry = MockGeometry::hitting(target_id, hit_point, 9.5);
    let target = Target::new(target_id, Vec3::ZERO);
    let camera = camera_facing_origin();
    let mut recorder = ProbeRecorder::new();

    ray_tester().check_observed(&geometry, &target, &camera, &mut recorder).unwrap();

    assert_eq!(recorder.len(), 1);
    let probe = recorder.probes()[0];
    assert_eq!(probe.segment(), (camera.position(), hit_point));
    assert_eq!(probe.outcome, ProbeOutcome::Clear);
    assert_eq!(probe.outcome.color(), glam::Vec4::new(0.0, 1.0, 0.0, 1.0));
    assert!(probe.debug_sphere.is_none());
}

#[test]
fn test_probe_reports_blocked_with_debug_sphere() {
    let (target_id, wall_id) = surfaces();
    let hit_point = Vec3::new(0.0, 0.0, 4.0);
    let geometry = MockGeometry::hitting(wall_id, hit_point, 6.0);
    let target = Target::new(target_id, Vec3::ZERO);
    let config = SelectorConfig::default().with_cast_mode(CastMode::sphere(1.5));
    let mut recorder = ProbeRecorder::new();

    VisibilityTester::new(config)
        .unwrap()
        .check_observed(&geometry, &target, &camera_facing_origin(), &mut recorder)
        .unwrap();

    let probe = recorder.probes()[0];
    assert_eq!(probe.outcome, ProbeOutcome::Blocked);
    assert_eq!(probe.outcome.color(), glam::Vec4::new(1.0, 0.0, 0.0, 1.0));
    let sphere = probe.debug_sphere.unwrap();
    assert_eq!(sphere.center, hit_point);
    assert_eq!(sphere.radius, 1.5);
}

#[test]
fn test_no_probe_without_hit() {
    let (target_id, _) = surfaces();
    let target = Target::new(target_id, Vec3::ZERO);
    let mut recorder = ProbeRecorder::new();

    // No hit
    ray_tester()
        .check_observed(&MockGeometry::new(), &target, &camera_facing_origin(), &mut recorder)
        .unwrap();
    // Outside frustum
    let behind = Target::new(target_id, Vec3::new(0.0, 0.0, 30.0));
    ray_tester()
        .check_observed(&MockGeometry::hitting(target_id, Vec3::ZERO, 1.0), &behind, &camera_facing_origin(), &mut recorder)
        .unwrap();

    assert!(recorder.is_empty());
}

#[test]
fn test_observer_does_not_change_verdict() {
    let (target_id, wall_id) = surfaces();
    let target = Target::new(target_id, Vec3::ZERO);
    let tester = ray_tester();
    let camera = camera_facing_origin();

    for geometry in [
        MockGeometry::hitting(target_id, Vec3::ZERO, 10.0),
        MockGeometry::hitting(wall_id, Vec3::Z, 9.0),
        MockGeometry::new(),
    ] {
        let plain = tester.check(&geometry, &target, &camera).unwrap();
        let mut count = 0;
        let mut counter = |_: &VisibilityProbe| count += 1;
        let observed = tester.check_observed(&geometry, &target, &camera, &mut counter).unwrap();
        assert_eq!(plain, observed);
        assert!(count <= 1);
    }
}

#[test]
fn test_scripted_answers_apply_in_order() {
    let (target_id, wall_id) = surfaces();
    let target = Target::new(target_id, Vec3::ZERO);
    let geometry = MockGeometry::new().with_script(vec![
        Ok(Some(QueryHit { point: Vec3::Z, surface: wall_id, distance: 9.0 })),
        Ok(Some(QueryHit { point: Vec3::ZERO, surface: target_id, distance: 10.0 })),
    ]);
    let tester = ray_tester();
    let camera = camera_facing_origin();

    assert_eq!(tester.check(&geometry, &target, &camera).unwrap(), Visibility::Occluded(wall_id));
    assert_eq!(tester.check(&geometry, &target, &camera).unwrap(), Visibility::Visible);
    assert_eq!(tester.check(&geometry, &target, &camera).unwrap(), Visibility::NoHit);
}
