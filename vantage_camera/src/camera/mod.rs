//! Camera module: camera pose, projection, frustum, and bounds.
//!
//! Cameras are plain values owned by the caller (usually through a
//! `CameraRig`). The frustum is derived on demand from the current pose,
//! so moving a camera between ticks needs no extra bookkeeping.

mod aabb;
mod camera;
mod frustum;

pub use aabb::AABB;
pub use camera::{Camera, Projection};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
