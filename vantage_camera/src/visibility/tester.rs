/// Visibility Tester: can this camera see the target right now?
///
/// Two stages, cheapest first:
/// 1. Frustum containment of the target point (plane test, no query).
/// 2. One occlusion cast from the camera towards the target, limited to
///    `max_distance` and filtered by the occlusion layer mask.
///
/// Only a first hit on the target itself counts as visible. A cast that hits
/// nothing is NOT visible, so a target farther than `max_distance` is never
/// seen even with nothing in between.

use glam::Vec3;
use crate::camera::{Camera, AABB};
use crate::config::SelectorConfig;
use crate::error::{Error, Result};
use crate::query::{GeometryQuery, SurfaceId};
use super::observer::{
    DebugSphere, NoopObserver, ProbeOutcome, VisibilityObserver, VisibilityProbe,
};

/// The tracked object: a world position plus the identity of its surface.
///
/// Owned and moved by the host; read-only here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub surface: SurfaceId,
    pub position: Vec3,
}

impl Target {
    pub fn new(surface: SurfaceId, position: Vec3) -> Self {
        Self { surface, position }
    }
}

/// Verdict of one visibility test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Target outside the view volume, no cast issued
    OutsideFrustum,
    /// Cast reached `max_distance` without hitting anything
    NoHit,
    /// Another surface was hit before the target
    Occluded(SurfaceId),
    /// First hit was the target
    Visible,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Frustum-then-cast visibility predicate.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityTester {
    config: SelectorConfig,
}

impl VisibilityTester {
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `config` does not validate.
    pub fn new(config: SelectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Test `camera` against `target` without diagnostics.
    pub fn check<G: GeometryQuery + ?Sized>(
        &self,
        geometry: &G,
        target: &Target,
        camera: &Camera,
    ) -> Result<Visibility> {
        self.check_observed(geometry, target, camera, &mut NoopObserver)
    }

    /// Test `camera` against `target`, reporting the cast to `observer`.
    ///
    /// # Errors
    ///
    /// - Any error from `geometry` (frustum extraction or cast), unchanged.
    /// - `Error::DegenerateDirection` if the target is in the frustum but
    ///   the camera sits exactly on it.
    pub fn check_observed<G: GeometryQuery + ?Sized>(
        &self,
        geometry: &G,
        target: &Target,
        camera: &Camera,
        observer: &mut dyn VisibilityObserver,
    ) -> Result<Visibility> {
        let frustum = geometry.frustum_planes(camera)?;

        if !frustum.intersects_aabb(&AABB::from_point(target.position)) {
            crate::vantage_trace!("vantage::Tester", "Target {:?} outside frustum", target.position);
            return Ok(Visibility::OutsideFrustum);
        }

        let origin = camera.position();
        let direction = (target.position - origin).try_normalize().ok_or_else(|| {
            Error::DegenerateDirection(format!(
                "camera at {:?} coincides with the target",
                origin
            ))
        })?;

        let hit = self.config.cast_mode.cast(
            geometry,
            origin,
            direction,
            self.config.max_distance,
            self.config.occlusion_filter,
        )?;

        let Some(hit) = hit else {
            crate::vantage_trace!("vantage::Tester", "No hit within {} units", self.config.max_distance);
            return Ok(Visibility::NoHit);
        };

        let (visibility, outcome) = if hit.surface == target.surface {
            (Visibility::Visible, ProbeOutcome::Clear)
        } else {
            (Visibility::Occluded(hit.surface), ProbeOutcome::Blocked)
        };

        observer.on_probe(&VisibilityProbe {
            origin,
            hit_point: hit.point,
            outcome,
            debug_sphere: self.config.cast_mode.radius().map(|radius| DebugSphere {
                center: hit.point,
                radius,
            }),
        });

        crate::vantage_trace!("vantage::Tester", "{:?} at distance {:.3}", visibility, hit.distance);
        Ok(visibility)
    }

    /// Boolean form of [`check`](Self::check).
    pub fn is_visible<G: GeometryQuery + ?Sized>(
        &self,
        geometry: &G,
        target: &Target,
        camera: &Camera,
    ) -> Result<bool> {
        Ok(self.check(geometry, target, camera)?.is_visible())
    }
}

#[cfg(test)]
#[path = "tester_tests.rs"]
mod tests;
