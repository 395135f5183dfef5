//! Systems that operate on the simulation world each tick.
//!
//! Run order matches the source game's frame loop: projectiles advance,
//! the impact cooldown ticks down, hazards are classified against the
//! planet, hazards move, stray projectiles are culled, and finally a
//! read-only snapshot is built.

pub mod cleanup;
pub mod collision;
pub mod cooldown;
pub mod movement;
pub mod snapshot;
