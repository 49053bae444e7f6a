/// Diagnostic side channel of the visibility tester.
///
/// Observers receive one probe per cast that struck something. They are
/// called after the verdict is computed and cannot influence it. In a
/// production build the host passes `NoopObserver` (or nothing).

use glam::{Vec3, Vec4};

/// Outcome tag of a probe, mapped to a debug color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The first hit was the target
    Clear,
    /// Another surface was hit first
    Blocked,
}

impl ProbeOutcome {
    /// RGBA debug color: green for `Clear`, red for `Blocked`.
    pub fn color(&self) -> Vec4 {
        match self {
            ProbeOutcome::Clear => Vec4::new(0.0, 1.0, 0.0, 1.0),
            ProbeOutcome::Blocked => Vec4::new(1.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Debug shape placement for sphere casts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// One cast, as seen by a debug renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityProbe {
    /// Cast origin (camera position)
    pub origin: Vec3,
    /// Where the cast stopped
    pub hit_point: Vec3,
    pub outcome: ProbeOutcome,
    /// Set in sphere-cast mode only
    pub debug_sphere: Option<DebugSphere>,
}

impl VisibilityProbe {
    /// Segment to draw, origin first.
    pub fn segment(&self) -> (Vec3, Vec3) {
        (self.origin, self.hit_point)
    }
}

/// Receiver for visibility probes (line drawing, gizmo placement, ...).
pub trait VisibilityObserver {
    fn on_probe(&mut self, probe: &VisibilityProbe);
}

/// Observer that discards every probe.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl VisibilityObserver for NoopObserver {
    fn on_probe(&mut self, _probe: &VisibilityProbe) {}
}

/// Observer that keeps every probe, in emission order.
#[derive(Debug, Default, Clone)]
pub struct ProbeRecorder {
    probes: Vec<VisibilityProbe>,
}

impl ProbeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probes(&self) -> &[VisibilityProbe] {
        &self.probes
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Drop recorded probes (typically once per tick, after drawing).
    pub fn clear(&mut self) {
        self.probes.clear();
    }
}

impl VisibilityObserver for ProbeRecorder {
    fn on_probe(&mut self, probe: &VisibilityProbe) {
        self.probes.push(*probe);
    }
}

impl<F: FnMut(&VisibilityProbe)> VisibilityObserver for F {
    fn on_probe(&mut self, probe: &VisibilityProbe) {
        self(probe)
    }
}
