use glam::Vec3;
use crate::error::{Error, Result};
use super::geometry_query::{GeometryQuery, QueryHit};
use super::layer::LayerMask;

/// Occlusion strategy used by the visibility tester.
///
/// Both variants share one control flow. They differ only in the optional
/// radius handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CastMode {
    /// Thin line query
    #[default]
    Ray,
    /// Swept-sphere query, tolerant of near misses and target size
    SphereCast {
        /// Sphere radius in world units, must be positive
        radius: f32,
    },
}

impl CastMode {
    pub fn sphere(radius: f32) -> Self {
        CastMode::SphereCast { radius }
    }

    /// `None` for `Ray`.
    pub fn radius(&self) -> Option<f32> {
        match *self {
            CastMode::Ray => None,
            CastMode::SphereCast { radius } => Some(radius),
        }
    }

    /// # Errors
    ///
    /// `Error::InvalidConfiguration` for a non-positive or non-finite radius.
    pub fn validate(&self) -> Result<()> {
        match *self {
            CastMode::Ray => Ok(()),
            CastMode::SphereCast { radius } if radius.is_finite() && radius > 0.0 => Ok(()),
            CastMode::SphereCast { radius } => Err(Error::InvalidConfiguration(format!(
                "sphere cast radius must be positive and finite (got {})",
                radius
            ))),
        }
    }

    /// Issue the occlusion query this mode stands for.
    pub fn cast<G: GeometryQuery + ?Sized>(
        &self,
        geometry: &G,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        match *self {
            CastMode::Ray => geometry.cast_ray(origin, direction, max_distance, filter),
            CastMode::SphereCast { radius } => {
                geometry.cast_sphere(origin, direction, radius, max_distance, filter)
            }
        }
    }
}

#[cfg(test)]
#[path = "cast_mode_tests.rs"]
mod tests;
