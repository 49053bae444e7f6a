/// Camera: pose plus projection parameters.
///
/// The camera looks down its local -Z axis with +Y up (right-handed, the glam
/// convention). View, projection, and frustum are derived from the current
/// fields each time they are requested.
///
/// Degenerate projections (zero field of view, zero aspect ratio, zero-size
/// orthographic volume, near >= far) are a configuration error. They are not
/// checked and the resulting frustum is undefined.

use glam::{Mat3, Mat4, Quat, Vec3};
use super::frustum::Frustum;

/// Projection parameters, enough to derive the four side planes plus
/// near and far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection
    Perspective {
        /// Vertical field of view in radians
        fov_y: f32,
        /// Width / height
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic projection centered on the view axis
    Orthographic {
        half_width: f32,
        half_height: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    /// Projection matrix with depth mapped to [0, 1].
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective { fov_y, aspect, near, far } => {
                Mat4::perspective_rh(fov_y, aspect, near, far)
            }
            Projection::Orthographic { half_width, half_height, near, far } => {
                Mat4::orthographic_rh(
                    -half_width, half_width,
                    -half_height, half_height,
                    near, far,
                )
            }
        }
    }

    pub fn near(&self) -> f32 {
        match *self {
            Projection::Perspective { near, .. } | Projection::Orthographic { near, .. } => near,
        }
    }

    pub fn far(&self) -> f32 {
        match *self {
            Projection::Perspective { far, .. } | Projection::Orthographic { far, .. } => far,
        }
    }
}

impl Default for Projection {
    /// 60° vertical FOV, 16:9, near 0.3, far 1000 (a typical game camera).
    fn default() -> Self {
        Projection::Perspective {
            fov_y: 60f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.3,
            far: 1000.0,
        }
    }
}

/// A view volume descriptor observing the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    orientation: Quat,
    projection: Projection,
}

impl Camera {
    /// Create a camera from a world pose and projection.
    pub fn new(position: Vec3, orientation: Quat, projection: Projection) -> Self {
        Self {
            position,
            orientation,
            projection,
        }
    }

    /// Create a camera at `position` aimed at `target`.
    ///
    /// `up` must not be parallel to the viewing direction, and `target` must
    /// differ from `position`.
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, projection: Projection) -> Self {
        let forward = (target - position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);
        let orientation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward));

        Self::new(position, orientation, projection)
    }

    // ===== GETTERS =====

    /// World position (origin of every occlusion cast).
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World orientation.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Unit viewing direction in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.conjugate()) * Mat4::from_translation(-self.position)
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Current frustum, derived from pose and projection.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Re-aim the camera at `target`, keeping its position.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        *self = Self::looking_at(self.position, target, up, self.projection);
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
