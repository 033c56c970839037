//! Point-mass entity state and prediction queries
//!
//! An entity carries its kinematic state as plain public fields; the
//! bounding box and collidable flag sit behind accessors so the invariant
//! "collidable implies a box is present" cannot be broken from outside.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::collision::{Side, collision_side};
use super::PhysicsError;

/// Shared handle to an entity.
///
/// The constructing code owns the entity; a [`World`](super::World) holds
/// clones of the handle and distinguishes entities by the handle's
/// allocation, not by field values. `Rc` keeps the whole core single-thread
/// by construction.
pub type EntityHandle = Rc<RefCell<Entity>>;

/// A point-mass entity bound to the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Mass, carried for force/response code outside this core; integration
    /// and collision prediction never read it. Unvalidated.
    pub mass: f32,
    /// Acceleration applied every tick, constant unless mutated externally
    pub acceleration: Vec2,
    /// Current velocity, updated every tick
    pub velocity: Vec2,
    /// Current position, updated every tick
    pub position: Vec2,
    bounding_box: Option<Aabb>,
    collidable: bool,
}

impl Entity {
    /// Create an entity. `collidable` is derived from whether a bounding box
    /// was supplied; [`Entity::set_collidable`] can re-toggle it afterwards.
    pub fn new(
        mass: f32,
        acceleration: Vec2,
        velocity: Vec2,
        position: Vec2,
        bounding_box: Option<Aabb>,
    ) -> Self {
        Self {
            mass,
            acceleration,
            velocity,
            position,
            collidable: bounding_box.is_some(),
            bounding_box,
        }
    }

    /// Wrap the entity in a shared handle for registration with a `World`
    pub fn into_handle(self) -> EntityHandle {
        Rc::new(RefCell::new(self))
    }

    /// The bounding box supplied at construction, if any. Never mutated by
    /// the core.
    #[inline]
    pub fn bounding_box(&self) -> Option<&Aabb> {
        self.bounding_box.as_ref()
    }

    /// Whether the entity currently participates in collision queries
    #[inline]
    pub fn collidable(&self) -> bool {
        self.collidable
    }

    /// Toggle collision participation.
    ///
    /// Fails with [`PhysicsError::InvalidConfiguration`] when enabling
    /// without a bounding box. Never touches the box itself.
    pub fn set_collidable(&mut self, enable: bool) -> Result<(), PhysicsError> {
        if enable && self.bounding_box.is_none() {
            return Err(PhysicsError::InvalidConfiguration);
        }
        self.collidable = enable;
        Ok(())
    }

    /// The position this entity will occupy after one more integration step.
    ///
    /// Pure query: repeated calls with unchanged state return the same value
    /// and nothing is mutated.
    #[inline]
    pub fn predicted_position(&self) -> Vec2 {
        self.position + self.velocity
    }

    /// Predict whether this entity collides with `other` on the next step,
    /// and on which side of this entity's box.
    ///
    /// Both entities must carry a bounding box; a missing box is
    /// [`PhysicsError::InvalidState`], never a silent "no collision". Boxes
    /// are tested for overlap at their current positions; only the side
    /// classification looks at predicted positions.
    pub fn predict_collision(&self, other: &Entity) -> Result<Option<Side>, PhysicsError> {
        let (self_box, other_box) = match (&self.bounding_box, &other.bounding_box) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(PhysicsError::InvalidState),
        };

        if !self_box.overlaps(other_box) {
            return Ok(None);
        }

        let side = collision_side(self.predicted_position(), other.predicted_position());
        Ok(Some(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_entity(position: Vec2, bounding_box: Option<Aabb>) -> Entity {
        Entity::new(1.0, Vec2::ZERO, Vec2::ZERO, position, bounding_box)
    }

    #[test]
    fn test_collidable_derived_from_box() {
        let boxed = still_entity(
            Vec2::ZERO,
            Some(Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0))),
        );
        assert!(boxed.collidable());

        let boxless = still_entity(Vec2::ZERO, None);
        assert!(!boxless.collidable());
    }

    #[test]
    fn test_set_collidable_without_box_fails() {
        let mut entity = still_entity(Vec2::ZERO, None);
        assert_eq!(
            entity.set_collidable(true),
            Err(PhysicsError::InvalidConfiguration)
        );
        assert!(!entity.collidable());
    }

    #[test]
    fn test_set_collidable_with_box() {
        let rect = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let mut entity = still_entity(Vec2::ZERO, Some(rect));

        entity.set_collidable(false).unwrap();
        assert!(!entity.collidable());

        entity.set_collidable(true).unwrap();
        assert!(entity.collidable());
        // The box itself is untouched
        assert_eq!(entity.bounding_box(), Some(&rect));
    }

    #[test]
    fn test_predicted_position_is_pure() {
        let entity = Entity::new(
            1.0,
            Vec2::new(0.0, -9.8),
            Vec2::new(3.0, 4.0),
            Vec2::new(10.0, 20.0),
            None,
        );

        let first = entity.predicted_position();
        let second = entity.predicted_position();
        assert_eq!(first, Vec2::new(13.0, 24.0));
        assert_eq!(first, second);
        // State unchanged; acceleration plays no part in the prediction
        assert_eq!(entity.position, Vec2::new(10.0, 20.0));
        assert_eq!(entity.velocity, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_predict_collision_requires_boxes() {
        let boxed = still_entity(
            Vec2::ZERO,
            Some(Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0))),
        );
        let boxless = still_entity(Vec2::ZERO, None);

        assert_eq!(
            boxed.predict_collision(&boxless),
            Err(PhysicsError::InvalidState)
        );
        assert_eq!(
            boxless.predict_collision(&boxed),
            Err(PhysicsError::InvalidState)
        );
    }

    #[test]
    fn test_predict_collision_disjoint_boxes() {
        // Far apart and flying straight at each other: current boxes decide,
        // not velocities
        let a = Entity::new(
            1.0,
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::ZERO,
            Some(Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0))),
        );
        let b = Entity::new(
            1.0,
            Vec2::ZERO,
            Vec2::new(-100.0, 0.0),
            Vec2::new(50.0, 0.0),
            Some(Aabb::new(Vec2::new(50.0, 0.0), Vec2::new(1.0, 1.0))),
        );

        assert_eq!(a.predict_collision(&b), Ok(None));
    }

    #[test]
    fn test_predict_collision_head_on() {
        // A covers x in [0,3], B covers x in [3,5]; they meet at x=3
        let a = Entity::new(
            1.0,
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Some(Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 2.0))),
        );
        let b = Entity::new(
            1.0,
            Vec2::ZERO,
            Vec2::new(-1.0, 0.0),
            Vec2::new(3.0, 0.0),
            Some(Aabb::new(Vec2::new(3.0, 0.0), Vec2::new(2.0, 2.0))),
        );

        // A.predicted = (1,0), B.predicted = (2,0): A hits on its right
        assert_eq!(a.predict_collision(&b), Ok(Some(Side::Right)));
        // And from B's perspective the contact is on its left
        assert_eq!(b.predict_collision(&a), Ok(Some(Side::Left)));
    }

    #[test]
    fn test_predict_collision_never_mutates() {
        let a = Entity::new(
            1.0,
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Some(Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 2.0))),
        );
        let b = Entity::new(
            1.0,
            Vec2::ZERO,
            Vec2::new(-1.0, 0.0),
            Vec2::new(3.0, 0.0),
            Some(Aabb::new(Vec2::new(3.0, 0.0), Vec2::new(2.0, 2.0))),
        );

        a.predict_collision(&b).unwrap();
        assert_eq!(a.position, Vec2::new(0.0, 0.0));
        assert_eq!(a.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(b.position, Vec2::new(3.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }
}
