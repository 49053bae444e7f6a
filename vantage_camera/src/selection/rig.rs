/// CameraRig: one selection session over a fixed, ordered camera list.
///
/// Owns the cameras, the selector, and the per-camera `enabled` flags the
/// render/output stage reads. `update()` is meant to be called once per tick.
///
/// Camera count and order are fixed for the rig's lifetime. Poses may change
/// between ticks through `camera_mut()`.

use crate::camera::Camera;
use crate::config::SelectorConfig;
use crate::error::{Error, Result};
use crate::query::GeometryQuery;
use crate::visibility::{NoopObserver, Target, VisibilityObserver};
use super::selection::Selection;
use super::selector::CameraSelector;

/// Per-session owner of the cameras and their activation flags.
#[derive(Debug, Clone)]
pub struct CameraRig {
    cameras: Vec<Camera>,
    enabled: Vec<bool>,
    selector: CameraSelector,
    last_selection: Option<Selection>,
}

impl CameraRig {
    /// Create a rig. All cameras start disabled.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `cameras` is empty or `config`
    /// does not validate.
    pub fn new(cameras: Vec<Camera>, config: SelectorConfig) -> Result<Self> {
        if cameras.is_empty() {
            return Err(Error::InvalidConfiguration("camera list is empty".to_string()));
        }
        let selector = CameraSelector::new(config)?;
        let enabled = vec![false; cameras.len()];

        Ok(Self {
            cameras,
            enabled,
            selector,
            last_selection: None,
        })
    }

    // ===== TICK =====

    /// Run one selection pass and apply it.
    pub fn update<G: GeometryQuery + ?Sized>(
        &mut self,
        geometry: &G,
        target: &Target,
    ) -> Result<&Selection> {
        self.update_observed(geometry, target, &mut NoopObserver)
    }

    /// Run one selection pass, report casts to `observer`, and apply it.
    ///
    /// On error the enabled flags from the previous tick are kept untouched.
    pub fn update_observed<G: GeometryQuery + ?Sized>(
        &mut self,
        geometry: &G,
        target: &Target,
        observer: &mut dyn VisibilityObserver,
    ) -> Result<&Selection> {
        let selection = match self.selector.select_observed(geometry, &self.cameras, target, observer) {
            Ok(selection) => selection,
            Err(error) => {
                crate::vantage_warn!(
                    "vantage::Rig",
                    "Tick failed, keeping previous activation {:?}: {}",
                    self.active_index(),
                    error
                );
                return Err(error);
            }
        };

        let previous = self.active_index();
        self.apply(&selection);

        match (previous, selection.active_index()) {
            (before, after) if before == after => {}
            (_, Some(index)) => {
                crate::vantage_info!("vantage::Rig", "Active camera changed: {:?} -> {}", previous, index);
            }
            (_, None) => {
                crate::vantage_debug!("vantage::Rig", "No camera sees the target, all cameras disabled");
            }
        }

        let applied: &Selection = self.last_selection.insert(selection);
        Ok(applied)
    }

    fn apply(&mut self, selection: &Selection) {
        for (flag, active) in self.enabled.iter_mut().zip(selection.activation()) {
            *flag = active;
        }
    }

    // ===== GETTERS =====

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn camera(&self, index: usize) -> Option<&Camera> {
        self.cameras.get(index)
    }

    /// Mutable access to a camera's pose/projection (not to the list itself).
    pub fn camera_mut(&mut self, index: usize) -> Option<&mut Camera> {
        self.cameras.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Always false: a rig holds at least one camera.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Enabled flag of camera `index` (false if out of range).
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    pub fn enabled_flags(&self) -> &[bool] {
        &self.enabled
    }

    /// Index of the enabled camera, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.enabled.iter().position(|enabled| *enabled)
    }

    /// Result of the last successful tick.
    pub fn last_selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    pub fn config(&self) -> &SelectorConfig {
        self.selector.config()
    }

    // ===== CONFIGURATION =====

    /// Swap the selector configuration. The current flags are kept until
    /// the next `update()`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `config` does not validate; the
    /// previous configuration stays in place.
    pub fn set_config(&mut self, config: SelectorConfig) -> Result<()> {
        self.selector = CameraSelector::new(config)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
