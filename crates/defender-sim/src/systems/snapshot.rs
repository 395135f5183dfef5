//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use defender_core::components::{Craft, Hazard, Projectile};
use defender_core::enums::GamePhase;
use defender_core::events::GameEvent;
use defender_core::state::{CraftView, GameStateSnapshot, HazardView, ProjectileView};
use defender_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    health: i32,
    max_health: i32,
    score: u32,
    players: u32,
    rooms: &[String],
    cooldown: u32,
    events: Vec<GameEvent>,
    message: &Option<String>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        health,
        max_health,
        score,
        players,
        rooms: rooms.to_vec(),
        cooldown,
        craft: build_craft(world),
        hazards: build_hazards(world),
        projectiles: build_projectiles(world),
        events,
        message: message.clone(),
    }
}

/// Build the craft view (camera follow target).
fn build_craft(world: &World) -> CraftView {
    world
        .query::<(&Craft, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| CraftView { position: *pos })
        .unwrap_or_default()
}

/// Build HazardView list from all live hazards.
fn build_hazards(world: &World) -> Vec<HazardView> {
    let mut hazards: Vec<HazardView> = world
        .query::<(&Hazard, &Position)>()
        .iter()
        .map(|(_, (hazard, pos))| HazardView {
            hazard_id: hazard.hazard_id,
            position: *pos,
            alerted: hazard.alerted,
        })
        .collect();

    hazards.sort_by_key(|h| h.hazard_id);
    hazards
}

/// Build ProjectileView list from all live projectiles.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (_, pos))| ProjectileView { position: *pos })
        .collect()
}
