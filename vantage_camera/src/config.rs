//! Selector configuration
//!
//! Static for a selection session. Build a new selector (or call
//! `CameraRig::set_config`) to change it.

use crate::error::{Error, Result};
use crate::query::{CastMode, LayerMask};

/// Default maximum occlusion query distance, in world units
pub const DEFAULT_MAX_DISTANCE: f32 = 100.0;

/// Configuration shared by the visibility tester and the camera selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Layers that occlude. Geometry outside the mask is transparent to casts.
    pub occlusion_filter: LayerMask,
    /// Occlusion strategy (thin ray or swept sphere)
    pub cast_mode: CastMode,
    /// Casts stop after this distance
    pub max_distance: f32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            occlusion_filter: LayerMask::DEFAULT_OCCLUDERS,
            cast_mode: CastMode::Ray,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl SelectorConfig {
    pub fn with_occlusion_filter(mut self, filter: LayerMask) -> Self {
        self.occlusion_filter = filter;
        self
    }

    pub fn with_cast_mode(mut self, cast_mode: CastMode) -> Self {
        self.cast_mode = cast_mode;
        self
    }

    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Reject values no query can be built from.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if the sphere radius or the max
    /// distance is non-positive or not finite.
    pub fn validate(&self) -> Result<()> {
        self.cast_mode.validate()?;
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "max query distance must be positive and finite (got {})",
                self.max_distance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
