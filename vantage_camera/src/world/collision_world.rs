/// CollisionWorld: in-process reference backend for `GeometryQuery`.
///
/// Brute force over every collider per cast, each cast answered by parry3d.
/// A real host plugs its physics engine in instead.

use glam::Vec3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::query::{GeometryQuery, LayerMask, QueryHit, SurfaceId};
use super::collider::{Collider, Contact};

/// Owner of every collider, keyed by surface identity.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    colliders: SlotMap<SurfaceId, Collider>,
    /// Ids per name, oldest first
    names: FxHashMap<String, Vec<SurfaceId>>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider and return its surface id.
    ///
    /// A later collider with the same name takes over the name lookup
    /// until it is removed.
    pub fn insert(&mut self, collider: Collider) -> SurfaceId {
        let name = collider.name().to_string();
        let id = self.colliders.insert(collider);
        self.names.entry(name).or_default().push(id);
        id
    }

    pub fn remove(&mut self, id: SurfaceId) -> Option<Collider> {
        let collider = self.colliders.remove(id)?;
        if let Some(ids) = self.names.get_mut(collider.name()) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.names.remove(collider.name());
            }
        }
        Some(collider)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Collider> {
        self.colliders.get(id)
    }

    /// Mutable access to a collider. Renaming is not possible through it.
    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Collider> {
        self.colliders.get_mut(id)
    }

    /// Move a collider. Returns false if `id` is unknown.
    pub fn set_translation(&mut self, id: SurfaceId, translation: Vec3) -> bool {
        match self.colliders.get_mut(id) {
            Some(collider) => {
                collider.set_translation(translation);
                true
            }
            None => false,
        }
    }

    /// Look a collider up by name. The most recent insert wins.
    pub fn find(&self, name: &str) -> Option<SurfaceId> {
        self.names.get(name).and_then(|ids| ids.last()).copied()
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &Collider)> {
        self.colliders.iter()
    }

    /// Nearest contact among enabled colliders whose layer passes `filter`.
    fn nearest(
        &self,
        filter: LayerMask,
        mut cast: impl FnMut(&Collider) -> Result<Option<Contact>>,
    ) -> Result<Option<QueryHit>> {
        let mut nearest: Option<(SurfaceId, Contact)> = None;

        for (id, collider) in self.colliders.iter() {
            if !collider.is_enabled() || !filter.includes(collider.layer()) {
                continue;
            }
            if let Some(contact) = cast(collider)? {
                if nearest.map_or(true, |(_, best)| contact.distance < best.distance) {
                    nearest = Some((id, contact));
                }
            }
        }

        Ok(nearest.map(|(surface, contact)| QueryHit {
            point: contact.point,
            surface,
            distance: contact.distance,
        }))
    }
}

fn unit_direction(direction: Vec3) -> Result<Vec3> {
    direction.try_normalize().ok_or_else(|| {
        Error::InvalidConfiguration(format!("cast direction {:?} cannot be normalized", direction))
    })
}

impl GeometryQuery for CollisionWorld {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        let direction = unit_direction(direction)?;
        self.nearest(filter, |collider| Ok(collider.ray_contact(origin, direction, max_distance)))
    }

    fn cast_sphere(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "sphere cast radius must be positive and finite (got {})",
                radius
            )));
        }
        let direction = unit_direction(direction)?;
        self.nearest(filter, |collider| collider.sphere_contact(origin, direction, radius, max_distance))
    }
}

#[cfg(test)]
#[path = "collision_world_tests.rs"]
mod tests;
