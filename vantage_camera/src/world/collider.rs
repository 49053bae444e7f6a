/// Collider: a named surface in the reference collision world.

use glam::Vec3;
use parry3d::math::{Isometry, Point, Real, Vector};
use parry3d::query::{self, PointQuery, Ray, RayCast, ShapeCastOptions, ShapeCastStatus};
use parry3d::shape::{Ball, Cuboid, Shape};
use crate::camera::AABB;
use crate::error::{Error, Result};
use crate::query::Layer;

/// Collider geometry, centered on the collider's translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

/// A surface that casts can hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    name: String,
    shape: ColliderShape,
    translation: Vec3,
    layer: Layer,
    enabled: bool,
}

impl Collider {
    pub fn new(name: impl Into<String>, shape: ColliderShape, translation: Vec3) -> Self {
        Self {
            name: name.into(),
            shape,
            translation,
            layer: Layer::DEFAULT,
            enabled: true,
        }
    }

    pub fn sphere(name: impl Into<String>, translation: Vec3, radius: f32) -> Self {
        Self::new(name, ColliderShape::Sphere { radius }, translation)
    }

    pub fn cuboid(name: impl Into<String>, translation: Vec3, half_extents: Vec3) -> Self {
        Self::new(name, ColliderShape::Cuboid { half_extents }, translation)
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// World-space bounds.
    pub fn world_aabb(&self) -> AABB {
        match self.shape {
            ColliderShape::Sphere { radius } => {
                AABB::from_center_half_extents(self.translation, Vec3::splat(radius))
            }
            ColliderShape::Cuboid { half_extents } => {
                AABB::from_center_half_extents(self.translation, half_extents)
            }
        }
    }

    // ===== SETTERS =====

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    pub fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ===== CASTS =====

    fn position(&self) -> Isometry<Real> {
        Isometry::translation(self.translation.x, self.translation.y, self.translation.z)
    }

    /// Run `query` against this collider's parry shape.
    fn with_shape<R>(&self, query: impl FnOnce(&dyn Shape) -> R) -> R {
        match self.shape {
            ColliderShape::Sphere { radius } => query(&Ball::new(radius)),
            ColliderShape::Cuboid { half_extents } => query(&Cuboid::new(to_vector(half_extents))),
        }
    }

    /// First point where a ray along the unit `direction` enters this
    /// collider. A ray starting inside never hits.
    pub(crate) fn ray_contact(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Contact> {
        let position = self.position();
        let ray = Ray::new(to_point(origin), to_vector(direction));

        self.with_shape(|shape| {
            if shape.contains_point(&position, &ray.origin) {
                return None;
            }
            shape.cast_ray(&position, &ray, max_distance, true)
        })
        .map(|distance| Contact {
            distance,
            point: origin + direction * distance,
        })
    }

    /// First touch of a ball of `radius` moving along the unit `direction`.
    /// A ball that already overlaps the collider at `origin` never hits.
    pub(crate) fn sphere_contact(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
    ) -> Result<Option<Contact>> {
        let position = self.position();
        let options = ShapeCastOptions {
            max_time_of_impact: max_distance,
            stop_at_penetration: true,
            ..Default::default()
        };

        let hit = self
            .with_shape(|shape| {
                query::cast_shapes(
                    &Isometry::translation(origin.x, origin.y, origin.z),
                    &to_vector(direction),
                    &Ball::new(radius),
                    &position,
                    &Vector::zeros(),
                    shape,
                    options,
                )
            })
            .map_err(|_| Error::QueryFailed(format!("sphere cast unsupported against '{}'", self.name)))?;

        Ok(hit
            .filter(|hit| !matches!(hit.status, ShapeCastStatus::PenetratingOrWithinTargetDist))
            .map(|hit| Contact {
                distance: hit.time_of_impact,
                point: from_point(position * hit.witness2),
            }))
    }
}

/// Where a cast first touches a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Contact {
    /// Travel along the cast direction
    pub distance: f32,
    /// On the collider's surface, in world space
    pub point: Vec3,
}

fn to_point(v: Vec3) -> Point<Real> {
    Point::new(v.x, v.y, v.z)
}

fn to_vector(v: Vec3) -> Vector<Real> {
    Vector::new(v.x, v.y, v.z)
}

fn from_point(p: Point<Real>) -> Vec3 {
    Vec3::new(p.x, p.y, p.z)
}
