//! Proximity classification and the health state machine.
//!
//! Hazards are classified against two nested axis-aligned cubes centered
//! on the planet. The check is per-axis against the half-extent, not a
//! radial distance — kept verbatim from the source game.
//!
//! Outer band: the hazard's alert flag is set and an alert event fires,
//! once per hazard. Inner band: the hazard is queued for removal, the
//! cooldown restarts, and the collision penalty is applied with a floor
//! of zero. Health reaching zero transitions the phase to `Over` exactly
//! once; no further hazards are processed after that.

use hecs::World;

use defender_core::components::Hazard;
use defender_core::constants::{
    COLLISION_PENALTY, COOLDOWN_TICKS, INNER_BAND_HALF_EXTENT, OUTER_BAND_HALF_EXTENT,
};
use defender_core::enums::GamePhase;
use defender_core::events::GameEvent;
use defender_core::types::Position;

/// Message surfaced when the planet's health is exhausted.
pub const GAME_OVER_MESSAGE: &str = "Game Over";

/// Classify every hazard, apply impact effects, and despawn destroyed
/// hazards. Removal is deferred through `despawn_buffer` so the world is
/// never mutated mid-iteration.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    health: &mut i32,
    phase: &mut GamePhase,
    cooldown: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
    message: &mut Option<String>,
) {
    despawn_buffer.clear();

    for (entity, (hazard, pos)) in world.query_mut::<(&mut Hazard, &Position)>() {
        if *phase != GamePhase::Running {
            break;
        }

        if within_band(pos, OUTER_BAND_HALF_EXTENT) && !hazard.alerted {
            hazard.alerted = true;
            events.push(GameEvent::HazardAlert {
                hazard_id: hazard.hazard_id,
            });
        }

        if within_band(pos, INNER_BAND_HALF_EXTENT) {
            despawn_buffer.push(entity);
            *cooldown = COOLDOWN_TICKS;
            *health = (*health - COLLISION_PENALTY).max(0);
            events.push(GameEvent::PlanetHit {
                hazard_id: hazard.hazard_id,
                health: *health,
            });

            if *health == 0 {
                *phase = GamePhase::Over;
                *message = Some(GAME_OVER_MESSAGE.to_string());
                events.push(GameEvent::GameOver {
                    message: GAME_OVER_MESSAGE.to_string(),
                });
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Per-axis cube containment: all three coordinates must lie strictly
/// inside the half-extent.
fn within_band(pos: &Position, half_extent: f64) -> bool {
    -half_extent < pos.x
        && pos.x < half_extent
        && -half_extent < pos.y
        && pos.y < half_extent
        && -half_extent < pos.z
        && pos.z < half_extent
}
