//! Simulation engine for Earth Defender.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the session layer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use defender_core as core;
pub use engine::SimulationEngine;
