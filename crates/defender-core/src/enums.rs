//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). Exactly one holds at a time.
/// `Over` is terminal: no state mutation happens after entering it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session started yet.
    #[default]
    Idle,
    /// Session active, ticks mutate state.
    Running,
    /// Session suspended; ticks are no-ops until resume.
    Paused,
    /// Planet health reached zero. Terminal.
    Over,
}

/// The six craft steering directions bound to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerDirection {
    /// +y
    Up,
    /// -y
    Down,
    /// +x
    Right,
    /// -x
    Left,
    /// +z
    Forward,
    /// -z
    Backward,
}
