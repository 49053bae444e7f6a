//! Geometry query interface
//!
//! The seam between this crate and the host's physics or geometry backend.
//! The host implements [`GeometryQuery`]; the visibility tester calls it
//! through [`CastMode`], which picks the ray or swept-sphere variant.

mod layer;
mod geometry_query;
mod cast_mode;

#[cfg(test)]
pub(crate) mod mock_geometry;

pub use layer::{Layer, LayerMask};
pub use geometry_query::{GeometryQuery, QueryHit, SurfaceId};
pub use cast_mode::CastMode;
