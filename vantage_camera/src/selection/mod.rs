//! Selection module: camera selector and the per-session camera rig.
//!
//! The selector only decides. The rig owns the cameras' enabled flags and
//! applies a decision once a whole pass has succeeded.

mod selection;
mod selector;
mod rig;

pub use selection::{CameraState, Selection};
pub use selector::CameraSelector;
pub use rig::CameraRig;
