/// Mock GeometryQuery for unit tests (no collision world required)
///
/// Answers casts from a script (then a fallback answer), records every call,
/// and can inject backend faults.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use glam::Vec3;
use crate::camera::{Camera, Frustum};
use crate::error::{Error, Result};
use super::{GeometryQuery, LayerMask, QueryHit, SurfaceId};

/// One recorded cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastCall {
    pub origin: Vec3,
    pub direction: Vec3,
    /// `None` for ray casts
    pub radius: Option<f32>,
    pub max_distance: f32,
    pub filter: LayerMask,
}

pub struct MockGeometry {
    script: RefCell<VecDeque<Result<Option<QueryHit>>>>,
    fallback: Result<Option<QueryHit>>,
    frustum_failure: Option<Error>,
    calls: RefCell<Vec<CastCall>>,
    frustum_calls: Cell<usize>,
}

impl MockGeometry {
    /// Every cast hits nothing.
    pub fn new() -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            fallback: Ok(None),
            frustum_failure: None,
            calls: RefCell::new(Vec::new()),
            frustum_calls: Cell::new(0),
        }
    }

    /// Every cast hits `surface` at `point`.
    pub fn hitting(surface: SurfaceId, point: Vec3, distance: f32) -> Self {
        let mut mock = Self::new();
        mock.fallback = Ok(Some(QueryHit { point, surface, distance }));
        mock
    }

    /// Every cast fails with `Error::QueryFailed(message)`.
    pub fn failing(message: &str) -> Self {
        let mut mock = Self::new();
        mock.fallback = Err(Error::QueryFailed(message.to_string()));
        mock
    }

    /// Frustum extraction fails with `Error::QueryFailed(message)`.
    pub fn failing_frustum(message: &str) -> Self {
        let mut mock = Self::new();
        mock.frustum_failure = Some(Error::QueryFailed(message.to_string()));
        mock
    }

    /// Answer the next casts in order before falling back.
    pub fn with_script(self, answers: Vec<Result<Option<QueryHit>>>) -> Self {
        *self.script.borrow_mut() = answers.into();
        self
    }

    pub fn calls(&self) -> Vec<CastCall> {
        self.calls.borrow().clone()
    }

    pub fn cast_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn ray_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| c.radius.is_none()).count()
    }

    pub fn sphere_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| c.radius.is_some()).count()
    }

    pub fn frustum_count(&self) -> usize {
        self.frustum_calls.get()
    }

    fn answer(&self, call: CastCall) -> Result<Option<QueryHit>> {
        self.calls.borrow_mut().push(call);
        match self.script.borrow_mut().pop_front() {
            Some(answer) => answer,
            None => self.fallback.clone(),
        }
    }
}

impl GeometryQuery for MockGeometry {
    fn frustum_planes(&self, camera: &Camera) -> Result<Frustum> {
        self.frustum_calls.set(self.frustum_calls.get() + 1);
        match &self.frustum_failure {
            Some(error) => Err(error.clone()),
            None => Ok(camera.frustum()),
        }
    }

    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        self.answer(CastCall { origin, direction, radius: None, max_distance, filter })
    }

    fn cast_sphere(
        &self,
        origin: Vec3,
        direction: Vec3,
        radius: f32,
        max_distance: f32,
        filter: LayerMask,
    ) -> Result<Option<QueryHit>> {
        self.answer(CastCall { origin, direction, radius: Some(radius), max_distance, filter })
    }
}
