//! Deterministic simulation module
//!
//! All kinematics logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per `World::step` call)
//! - Per-entity updates are mutually independent, so iteration order is
//!   unobservable
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod entity;
pub mod world;

pub use aabb::Aabb;
pub use collision::{Side, collision_side};
pub use entity::{Entity, EntityHandle};
pub use world::World;

use thiserror::Error;

/// Errors reported by the simulation core.
///
/// Everything here is detected synchronously; nothing is retried or
/// recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Tried to mark an entity collidable without a bounding box.
    #[error("entity cannot be collidable without a bounding box")]
    InvalidConfiguration,

    /// Tried to predict a collision while one of the entities has no
    /// bounding box.
    #[error("collision prediction requires a bounding box on both entities")]
    InvalidState,
}
