//! Vantage demo
//!
//! Three cameras watch a cube walking in a circle around a wall, a glass
//! pane and a pillar. The rig runs once with ray casts, then once with sphere
//! casts, and logs every change of active camera.
//!
//! Run with `--trace` to also print every probe and per-camera verdict.

use glam::Vec3;
use vantage_camera::vantage::camera::{Camera, Projection};
use vantage_camera::vantage::log::{self, LogSeverity};
use vantage_camera::vantage::query::{CastMode, GeometryQuery, Layer, LayerMask, QueryHit, SurfaceId};
use vantage_camera::vantage::selection::CameraRig;
use vantage_camera::vantage::visibility::{ProbeRecorder, Target};
use vantage_camera::vantage::world::{Collider, CollisionWorld};
use vantage_camera::vantage::{Result, SelectorConfig};
use vantage_camera::{vantage_bail, vantage_error, vantage_info, vantage_trace};

/// User layer for see-through geometry
const GLASS: Layer = Layer::new(8);

const TICKS_PER_PHASE: usize = 48;
const SPHERE_RADIUS: f32 = 0.35;
const PATH_RADIUS: f32 = 5.0;

/// Every Nth tick the physics step is late and casts fail
const LATE_STEP_PERIOD: usize = 17;

// ============================================================================
// SCENE
// ============================================================================

fn build_world() -> (CollisionWorld, SurfaceId) {
    let mut world = CollisionWorld::new();

    let target = world.insert(Collider::cuboid("target", target_path(0), Vec3::splat(0.5)));
    world.insert(Collider::cuboid("wall", Vec3::new(0.0, 1.0, 8.0), Vec3::new(3.0, 2.0, 0.2)));
    world.insert(
        Collider::cuboid("glass pane", Vec3::new(9.0, 1.0, 0.0), Vec3::new(0.05, 2.0, 3.0)).with_layer(GLASS),
    );
    world.insert(Collider::sphere("pillar", Vec3::new(-6.0, 1.0, -6.0), 1.0));
    // Volumes the casts never see
    world.insert(
        Collider::cuboid("trigger zone", Vec3::new(0.0, 1.0, -8.0), Vec3::new(4.0, 2.0, 0.5))
            .with_layer(Layer::IGNORE_RAYCAST),
    );

    (world, target)
}

/// Cameras in priority order
fn build_cameras() -> Vec<Camera> {
    let projection = Projection::default();
    vec![
        Camera::looking_at(Vec3::new(0.0, 2.0, 14.0), Vec3::ZERO, Vec3::Y, projection),
        Camera::looking_at(Vec3::new(16.0, 2.0, 0.0), Vec3::ZERO, Vec3::Y, projection),
        Camera::looking_at(Vec3::new(-14.0, 6.0, -14.0), Vec3::ZERO, Vec3::Y, projection),
    ]
}

fn target_path(tick: usize) -> Vec3 {
    let angle = tick as f32 * std::f32::consts::TAU / TICKS_PER_PHASE as f32;
    Vec3::new(angle.sin() * PATH_RADIUS, 0.5, angle.cos() * PATH_RADIUS)
}

// ============================================================================
// PHYSICS STEP
// ============================================================================

/// Collision world seen through a physics step that may not be ready yet
struct PhysicsStep<'a> {
    world: &'a CollisionWorld,
    tick: usize,
}

impl PhysicsStep<'_> {
    fn is_ready(&self) -> bool {
        self.tick % LATE_STEP_PERIOD != LATE_STEP_PERIOD - 1
    }
}

impl GeometryQuery for PhysicsStep<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32, filter: LayerMask) -> Result<Option<QueryHit>> {
        if !self.is_ready() {
            vantage_bail!("demo::Physics", "step for tick {} not ready", self.tick);
        }
        self.world.cast_ray(origin, direction, max_distance, filter)
    }

    fn cast_sphere(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        if !self.is_ready() {
            vantage_bail!("demo::Physics", "step for tick {} not ready", self.tick);
        }
        self.world.cast_sphere(origin, direction, radius, max_distance, filter)
    }
}

// ============================================================================
// MAIN LOOP
// ============================================================================

fn run_phase(label: &str, rig: &mut CameraRig, world: &mut CollisionWorld, target_id: SurfaceId) -> Result<()> {
    vantage_info!("demo", "Phase '{}': {} ticks, {:?}", label, TICKS_PER_PHASE, rig.config().cast_mode);

    let mut recorder = ProbeRecorder::new();
    let mut failed_ticks = 0;

    for tick in 0..TICKS_PER_PHASE {
        let position = target_path(tick);
        world.set_translation(target_id, position);
        let target = Target::new(target_id, position);
        let physics = PhysicsStep { world: &*world, tick };

        match rig.update_observed(&physics, &target, &mut recorder) {
            Ok(_) => {}
            // The rig keeps the previous activation and logs the failure
            Err(_) if !physics.is_ready() => failed_ticks += 1,
            Err(error) => return Err(error),
        }

        for probe in recorder.probes() {
            vantage_trace!(
                "demo::Probes",
                "tick {}: {:?} -> {:?} {:?} rgba {:?} sphere {:?}",
                tick,
                probe.origin,
                probe.hit_point,
                probe.outcome,
                probe.outcome.color().to_array(),
                probe.debug_sphere
            );
        }
        recorder.clear();
    }

    vantage_info!(
        "demo",
        "Phase '{}' done: active camera {:?}, {} late physics steps",
        label,
        rig.active_index(),
        failed_ticks
    );
    Ok(())
}

fn run() -> Result<()> {
    let (mut world, target_id) = build_world();

    // Glass never blocks the view
    let ray = SelectorConfig::default().with_occlusion_filter(LayerMask::DEFAULT_OCCLUDERS.without(GLASS));
    let mut rig = CameraRig::new(build_cameras(), ray)?;
    run_phase("ray", &mut rig, &mut world, target_id)?;

    rig.set_config(ray.with_cast_mode(CastMode::sphere(SPHERE_RADIUS)))?;
    run_phase("sphere cast", &mut rig, &mut world, target_id)?;

    Ok(())
}

fn main() {
    let trace = std::env::args().skip(1).any(|arg| arg == "--trace");
    log::set_min_severity(if trace { LogSeverity::Trace } else { LogSeverity::Info });

    if let Err(error) = run() {
        vantage_error!("demo", "{}", error);
        std::process::exit(1);
    }
}
