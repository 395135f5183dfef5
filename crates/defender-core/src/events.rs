//! Events emitted by the simulation for the presentation and network
//! collaborators. Drained into each tick's snapshot.

use serde::{Deserialize, Serialize};

/// Outward simulation events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A hazard entered the outer proximity band. Fired once per hazard.
    HazardAlert { hazard_id: u32 },
    /// A hazard crossed the inner band: it was destroyed and the penalty
    /// applied. `health` is the post-impact value. The session surface
    /// relays this to the game server as `action_earth_collision`.
    PlanetHit { hazard_id: u32, health: i32 },
    /// The post-impact cooldown counter reached zero; the visual cue
    /// resets to neutral. Fired exactly once per cooldown period.
    CooldownExpired,
    /// Health reached zero. Terminal; fired exactly once per session.
    GameOver { message: String },
}
