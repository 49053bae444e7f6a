/// Geometry Query Interface: what the host must answer for us.
///
/// Two casts and one frustum extraction. Every operation returns a
/// `Result`: `Ok(None)` is the well-defined "nothing hit within range",
/// `Err` is a backend fault that aborts the whole selection pass.

use glam::Vec3;
use slotmap::{new_key_type, Key, KeyData};
use crate::camera::{Camera, Frustum};
use crate::error::Result;
use super::layer::LayerMask;

new_key_type! {
    /// Identity of a surface (collider) in the host's geometry.
    ///
    /// The target's identity is compared against the identity of the first
    /// surface a cast reports.
    pub struct SurfaceId;
}

impl SurfaceId {
    /// Build an id from a host-side 64-bit handle.
    pub fn from_raw(raw: u64) -> Self {
        KeyData::from_ffi(raw).into()
    }

    /// The 64-bit handle this id round-trips through.
    pub fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }
}

/// First surface struck by a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryHit {
    /// Contact point on the struck surface, in world space
    pub point: Vec3,
    /// Surface that was struck
    pub surface: SurfaceId,
    /// Distance travelled along the cast direction
    pub distance: f32,
}

/// Host geometry / physics backend.
///
/// `direction` is always unit length. Casts only consider surfaces whose
/// layer is in `filter`, and only hits within `max_distance`.
pub trait GeometryQuery {
    /// Six half-space planes bounding `camera`'s view volume.
    ///
    /// The default derives them from the camera's pose and projection.
    /// Hosts that already keep per-camera frusta can return those instead.
    fn frustum_planes(&self, camera: &Camera) -> Result<Frustum> {
        Ok(camera.frustum())
    }

    /// Zero-radius line query returning the first surface hit.
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>>;

    /// Swept-sphere query returning the first surface the sphere touches.
    fn cast_sphere(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>>;
}

impl<G: GeometryQuery + ?Sized> GeometryQuery for &G {
    fn frustum_planes(&self, camera: &Camera) -> Result<Frustum> {
        (**self).frustum_planes(camera)
    }

    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        (**self).cast_ray(origin, direction, max_distance, filter)
    }

    fn cast_sphere(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        (**self).cast_sphere(origin, direction, radius, max_distance, filter)
    }
}
