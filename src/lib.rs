//! kin2d - a minimal 2D point-mass kinematics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collision prediction)
//!
//! The crate advances the velocity and position of point-mass entities under
//! constant per-tick acceleration, and predicts which side of two overlapping
//! axis-aligned bounding boxes will touch on the next step. Rendering, input
//! and the driving game loop belong to the embedding application; the only
//! contract with it is `glam::Vec2` and the [`sim::Aabb`] rectangle.

pub mod sim;

pub use sim::{Aabb, Entity, EntityHandle, PhysicsError, Side, World};

pub use glam::Vec2;
