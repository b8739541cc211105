// src/types.rs
use serde::{Deserialize, Serialize};

// Re-export the vector type used throughout the crate.
pub use glam::Vec2;

/// Unified 2D point type for the whole crate.
pub type Point2D = Vec2;

/// One drawable contour line: an ordered pair of points in physical
/// coordinates (grid coordinate times cell size).
///
/// Segments are emitted once and never mutated; ownership passes to the
/// caller, which decides how (or whether) to render them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Same segment with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
