//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in scene space (scene units, Cartesian).
/// The defended planet sits at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position (3D).
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the origin (where the defended planet sits).
    pub fn range_from_origin(&self) -> f64 {
        self.range_to(&Position::default())
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
