/// Selection: outcome of one selector pass.
///
/// Ephemeral: describes a single tick. The caller applies it to whatever
/// owns the cameras' output (or lets a `CameraRig` do it).

/// Per-camera outcome of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    /// Tested, visible, and selected
    Active,
    /// Tested and not visible
    NotVisible,
    /// Never tested because an earlier camera was selected
    Skipped,
}

impl CameraState {
    pub fn is_active(&self) -> bool {
        matches!(self, CameraState::Active)
    }
}

/// Ordered per-camera decisions. At most one camera is `Active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    states: Vec<CameraState>,
    active: Option<usize>,
}

impl Selection {
    /// Build from pass results (crate-internal: only the selector creates these).
    pub(crate) fn from_states(states: Vec<CameraState>) -> Self {
        let active = states.iter().position(CameraState::is_active);
        debug_assert!(
            states.iter().filter(|s| s.is_active()).count() <= 1,
            "a selection holds at most one active camera"
        );
        Self { states, active }
    }

    /// Index of the active camera, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Out-of-range indices are inactive.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// One activation flag per camera, in list order.
    pub fn activation(&self) -> impl Iterator<Item = bool> + '_ {
        self.states.iter().map(CameraState::is_active)
    }

    pub fn states(&self) -> &[CameraState] {
        &self.states
    }

    /// Number of cameras the pass actually tested.
    pub fn tested_count(&self) -> usize {
        self.states.iter().filter(|s| **s != CameraState::Skipped).count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
