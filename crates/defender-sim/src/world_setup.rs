//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the defended planet, the player craft, and the hazard batch
//! with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use defender_core::components::{Craft, DefendedBody, Hazard, Projectile};
use defender_core::constants::*;
use defender_core::types::Position;

/// Set up the initial session world: planet, craft, and the full hazard
/// batch. Hazards are created once in bulk; the collection only shrinks
/// from here.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    max_hazards: usize,
    next_hazard_id: &mut u32,
) {
    spawn_defended_body(world);
    spawn_craft(world, rng);
    spawn_hazard_batch(world, rng, max_hazards, next_hazard_id);
}

/// Spawn the defended planet at the origin. It never moves.
pub fn spawn_defended_body(world: &mut World) -> hecs::Entity {
    world.spawn((DefendedBody, Position::new(0.0, 0.0, 0.0)))
}

/// Spawn the player craft at a random offset on the +x side of the
/// planet, matching the source game's spawn band.
pub fn spawn_craft(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let x = rng.gen_range(CRAFT_SPAWN_X_MIN..CRAFT_SPAWN_X_MIN + CRAFT_SPAWN_X_SPAN);
    world.spawn((Craft, Position::new(x, 0.0, 0.0)))
}

/// Spawn `count` hazards uniformly inside the spawn cube.
pub fn spawn_hazard_batch(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: usize,
    next_hazard_id: &mut u32,
) {
    for _ in 0..count {
        let position = Position::new(
            rng.gen_range(-HAZARD_SPAWN_HALF_EXTENT..HAZARD_SPAWN_HALF_EXTENT),
            rng.gen_range(-HAZARD_SPAWN_HALF_EXTENT..HAZARD_SPAWN_HALF_EXTENT),
            rng.gen_range(-HAZARD_SPAWN_HALF_EXTENT..HAZARD_SPAWN_HALF_EXTENT),
        );
        spawn_hazard_at(world, position, next_hazard_id);
    }
}

/// Spawn a single hazard at an explicit position.
pub fn spawn_hazard_at(
    world: &mut World,
    position: Position,
    next_hazard_id: &mut u32,
) -> hecs::Entity {
    let hazard_id = *next_hazard_id;
    *next_hazard_id += 1;

    world.spawn((
        Hazard {
            hazard_id,
            alerted: false,
        },
        position,
    ))
}

/// Spawn a projectile at the craft's position with the muzzle offset.
/// Returns `None` when no craft exists (no session running).
pub fn spawn_projectile(world: &mut World) -> Option<hecs::Entity> {
    let craft_pos = world
        .query::<(&Craft, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)?;

    Some(world.spawn((
        Projectile,
        Position::new(
            craft_pos.x + PROJECTILE_SPAWN_OFFSET_X,
            craft_pos.y,
            craft_pos.z,
        ),
    )))
}
