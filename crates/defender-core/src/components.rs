//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks the defended planet. Fixed at the origin, never moved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DefendedBody;

/// Marks the player's craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Craft;

/// A mobile obstacle drifting toward the planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    /// Stable identity assigned at spawn.
    pub hazard_id: u32,
    /// Set once the hazard first enters the outer proximity band.
    /// Keeps the alert cue edge-triggered.
    pub alerted: bool,
}

/// Marks a projectile fired from the craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;
