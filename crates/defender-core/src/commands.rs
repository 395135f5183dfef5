//! Player and server commands sent into the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so no
//! handler ever mutates the world while a tick is iterating it.

use serde::{Deserialize, Serialize};

use crate::enums::SteerDirection;

/// All inputs the engine accepts between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Spawn the world (planet, craft, hazard batch) and start ticking.
    StartSession,
    /// Suspend the simulation.
    Pause,
    /// Resume a paused simulation. No state re-initialization.
    Resume,

    // --- Craft control ---
    /// Nudge the craft by the fixed per-axis delta.
    Steer { direction: SteerDirection },
    /// Fire one projectile from the craft. No debounce: rapid repeats
    /// spawn multiple projectiles.
    Fire,

    // --- Inbound multiplayer advisories (never gate ticks) ---
    /// Update the advisory player headcount.
    SetPlayers { count: u32 },
    /// Replace the advisory room list.
    SetRooms { rooms: Vec<String> },
}
