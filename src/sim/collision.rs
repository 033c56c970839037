//! Collision-side classification
//!
//! Given the predicted positions of two entities whose boxes currently
//! overlap, decide which side of the first entity's box the impending
//! contact touches. Pure arithmetic, no state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The side of an entity's bounding box implicated in a predicted collision,
/// from that entity's own perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Right,
    Left,
    Top,
    Bottom,
}

/// Classify the collision side from two predicted positions.
///
/// Two-level decision: the x axis wins outright unless the predicted
/// x-components are exactly equal, in which case the y axis breaks the tie.
/// `a` is the entity whose perspective the result describes.
#[inline]
pub fn collision_side(a: Vec2, b: Vec2) -> Side {
    if a.x < b.x {
        Side::Right
    } else if a.x > b.x {
        Side::Left
    } else if a.y <= b.y {
        Side::Top
    } else {
        Side::Bottom
    }
}
