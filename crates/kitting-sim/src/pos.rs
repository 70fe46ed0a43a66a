#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planar robot position in map units.
///
/// Equality is exact on purpose: the planner clamps every step onto the target
/// coordinate, so a robot is "at" a station only when it lands on it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    /// Where the robot starts every run.
    pub const SPAWN: Pos = Pos::new(12.0, 7.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Pos) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Pos {
    fn default() -> Self {
        Self::SPAWN
    }
}
