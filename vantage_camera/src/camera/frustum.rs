/// Frustum: the six half-spaces a camera can see.
///
/// Planes are stored as `Vec4(nx, ny, nz, d)` with a unit normal pointing into
/// the view volume, so `n · p + d` is the signed distance of `p` in world
/// units. The containment rule is boundary inclusive: a point is outside only
/// when its distance to some plane is strictly negative.

use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};
use super::aabb::AABB;

/// Index of each plane in [`Frustum::planes`]
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// View volume of a perspective or orthographic camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Ordered as the `PLANE_*` constants
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Build the frustum of a combined `projection * view` matrix.
    ///
    /// Gribb & Hartmann extraction for a [0, 1] depth range (glam's `*_rh`
    /// projections), which makes the near plane row 2 on its own.
    pub fn from_view_projection(view_projection: &Mat4) -> Self {
        let x = view_projection.row(0);
        let y = view_projection.row(1);
        let z = view_projection.row(2);
        let w = view_projection.row(3);

        Self {
            planes: [w + x, w - x, w + y, w - y, z, w - z].map(normalize_plane),
        }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    pub fn signed_distance(&self, index: usize, point: Vec3) -> f32 {
        plane_distance(self.planes[index], point)
    }

    /// True unless `aabb` lies entirely behind one of the planes.
    ///
    /// Checks, per plane, the box corner furthest along the inward normal.
    /// A zero-extent box makes this an exact point test.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let toward_inside = plane.xyz().cmpge(Vec3::ZERO);
            let corner = Vec3::select(toward_inside, aabb.max, aabb.min);
            plane_distance(*plane, corner) >= 0.0
        })
    }

    /// True if `point` is inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.intersects_aabb(&AABB::from_point(point))
    }
}

fn plane_distance(plane: Vec4, point: Vec3) -> f32 {
    plane.xyz().dot(point) + plane.w
}

/// Scale a plane so its normal has unit length. Degenerate rows are kept as is.
fn normalize_plane(plane: Vec4) -> Vec4 {
    let length = plane.xyz().length();
    if length > 0.0 {
        plane / length
    } else {
        plane
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
