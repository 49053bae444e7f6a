/// Camera Selector: turns per-camera visibility into one active camera.
///
/// List order is the priority ranking: the first camera that sees the target
/// wins, and every camera after it is deactivated without being tested. A
/// single "already selected" latch guarantees at most one active camera.

use crate::camera::Camera;
use crate::config::SelectorConfig;
use crate::error::{Error, Result};
use crate::query::GeometryQuery;
use crate::visibility::{NoopObserver, Target, VisibilityObserver, VisibilityTester};
use super::selection::{CameraState, Selection};

/// First-visible-wins camera selection.
#[derive(Debug, Clone, Copy)]
pub struct CameraSelector {
    tester: VisibilityTester,
}

impl CameraSelector {
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `config` does not validate.
    pub fn new(config: SelectorConfig) -> Result<Self> {
        Ok(Self {
            tester: VisibilityTester::new(config)?,
        })
    }

    pub fn config(&self) -> &SelectorConfig {
        self.tester.config()
    }

    pub fn tester(&self) -> &VisibilityTester {
        &self.tester
    }

    /// Run one pass without diagnostics.
    pub fn select<G: GeometryQuery + ?Sized>(
        &self,
        geometry: &G,
        cameras: &[Camera],
        target: &Target,
    ) -> Result<Selection> {
        self.select_observed(geometry, cameras, target, &mut NoopObserver)
    }

    /// Run one pass over `cameras` in order.
    ///
    /// The pass is all-or-nothing: the first error aborts it and no
    /// `Selection` is produced, so the caller keeps its previous activation.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfiguration` if `cameras` is empty.
    /// - Any tester error (backend fault, degenerate direction).
    pub fn select_observed<G: GeometryQuery + ?Sized>(
        &self,
        geometry: &G,
        cameras: &[Camera],
        target: &Target,
        observer: &mut dyn VisibilityObserver,
    ) -> Result<Selection> {
        if cameras.is_empty() {
            return Err(Error::InvalidConfiguration("camera list is empty".to_string()));
        }

        let mut already_selected = false;
        let mut states = Vec::with_capacity(cameras.len());

        for (index, camera) in cameras.iter().enumerate() {
            if already_selected {
                states.push(CameraState::Skipped);
                continue;
            }

            let visibility = self.tester.check_observed(geometry, target, camera, observer)?;
            crate::vantage_trace!("vantage::Selector", "Camera {}: {:?}", index, visibility);

            if visibility.is_visible() {
                states.push(CameraState::Active);
                already_selected = true;
            } else {
                states.push(CameraState::NotVisible);
            }
        }

        let selection = Selection::from_states(states);
        crate::vantage_debug!(
            "vantage::Selector",
            "Pass over {} cameras: active {:?}, tested {}",
            selection.len(),
            selection.active_index(),
            selection.tested_count()
        );
        Ok(selection)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
