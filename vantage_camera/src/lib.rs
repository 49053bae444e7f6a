/*!
# Vantage Camera

Picks, among an ordered set of cameras watching one target, the single camera
that both frames the target and has an unobstructed line of sight to it.

The crate does not own rendering, physics, or the scene graph. It queries them
through the [`GeometryQuery`](crate::query::GeometryQuery) trait, once per tick,
and hands the caller an explicit per-camera decision to apply.

## Architecture

- **Camera**: pose + projection, derives the six frustum planes
- **GeometryQuery**: host-provided ray / sphere casts filtered by a layer mask
- **VisibilityTester**: frustum containment, then one occlusion cast
- **CameraSelector**: first visible camera in list order wins
- **CameraRig**: per-session owner of the cameras and their enabled flags
- **CollisionWorld**: in-process reference backend for `GeometryQuery`
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod camera;
pub mod query;
pub mod visibility;
pub mod selection;
pub mod world;

// Main vantage namespace module
pub mod vantage {
    // Error types
    pub use crate::error::{Error, Result};

    // Selector configuration
    pub use crate::config::{SelectorConfig, DEFAULT_MAX_DISTANCE};

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity, enabled,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Geometry query sub-module
    pub mod query {
        pub use crate::query::*;
    }

    // Visibility tester sub-module
    pub mod visibility {
        pub use crate::visibility::*;
    }

    // Selector and rig sub-module
    pub mod selection {
        pub use crate::selection::*;
    }

    // Reference collision world sub-module
    pub mod world {
        pub use crate::world::*;
    }
}

// Re-export math library at crate root
pub use glam;
