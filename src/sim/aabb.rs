//! Axis-aligned rectangle geometry for bounding boxes
//!
//! An `Aabb` is defined by its origin (top-left corner) and a width/height
//! pair, in the same coordinate space as entity positions. It exists purely
//! for overlap testing; dynamics never read it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub origin: Vec2,
    /// Width (x) and height (y)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Minimum extent (same as `origin`)
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Maximum extent (`origin + size`)
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Check whether two rectangles overlap.
    ///
    /// Closed-interval test: rectangles that share only an edge or a corner
    /// still count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();

        self.origin.x <= b_max.x
            && a_max.x >= other.origin.x
            && self.origin.y <= b_max.y
            && a_max.y >= other.origin.y
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }
}
