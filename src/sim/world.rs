//! World membership and per-tick integration
//!
//! A `World` owns a membership map of shared entity handles, keyed by the
//! handle's allocation so two entities with identical fields stay distinct
//! members. Each `step` advances every member with semi-implicit Euler:
//! velocity first, then position from the already-updated velocity.

use std::collections::HashMap;
use std::rc::Rc;

use super::entity::EntityHandle;

/// The container driving per-tick integration of all its entities
#[derive(Debug, Default)]
pub struct World {
    entities: HashMap<usize, EntityHandle>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Register an entity with the world.
    ///
    /// Membership is keyed by handle identity, so adding the same handle
    /// twice is a no-op. The caller keeps its own handle; dropping the world
    /// does not destroy the entity.
    pub fn add(&mut self, entity: &EntityHandle) {
        let key = Rc::as_ptr(entity) as usize;
        self.entities
            .entry(key)
            .or_insert_with(|| Rc::clone(entity));
    }

    /// Number of member entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every member entity by one tick.
    ///
    /// For each entity, `velocity += acceleration` then
    /// `position += velocity`. Members are integrated independently, so map
    /// iteration order never shows in the result. An empty world is a no-op.
    pub fn step(&mut self) {
        log::trace!("step: integrating {} entities", self.entities.len());
        for handle in self.entities.values() {
            let entity = &mut *handle.borrow_mut();
            entity.velocity += entity.acceleration;
            entity.position += entity.velocity;
        }
    }
}
