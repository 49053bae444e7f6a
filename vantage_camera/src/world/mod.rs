//! Reference collision world
//!
//! A small `GeometryQuery` implementation made of sphere and cuboid
//! colliders, each on one layer. Casts run through parry3d.

mod collider;
mod collision_world;

pub use collider::{Collider, ColliderShape};
pub use collision_world::CollisionWorld;
