//! Bare polyline output for curves generated without a tube surface.

use serde::{Deserialize, Serialize};
use strand_math::Point3;

/// An ordered run of vertices joined by one continuous line strip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3>,
}

impl Polyline {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of line segments in the strip.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Total arc length of the strip.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}
