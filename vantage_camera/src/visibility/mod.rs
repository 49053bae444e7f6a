//! Visibility module: frustum containment plus line-of-sight occlusion.

mod observer;
mod tester;

pub use observer::{
    DebugSphere, NoopObserver, ProbeOutcome, ProbeRecorder, VisibilityObserver, VisibilityProbe,
};
pub use tester::{Target, Visibility, VisibilityTester};
