//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state handed to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current planet health, clamped to [0, max_health].
    pub health: i32,
    pub max_health: i32,
    /// Running score (monotonic non-decreasing).
    pub score: u32,
    /// Advisory multiplayer headcount.
    pub players: u32,
    /// Advisory room list from the game server.
    pub rooms: Vec<String>,
    /// Ticks remaining before the post-impact cue resets.
    pub cooldown: u32,
    pub craft: CraftView,
    pub hazards: Vec<HazardView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events emitted during this tick, in emission order.
    pub events: Vec<GameEvent>,
    /// Terminal message, set exactly once on game over.
    pub message: Option<String>,
}

/// Craft position for camera follow and display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CraftView {
    pub position: Position,
}

/// A live hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub hazard_id: u32,
    pub position: Position,
    /// Whether the hazard has entered the outer band.
    pub alerted: bool,
}

/// A live projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
}
