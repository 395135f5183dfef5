//! Cleanup system: culls projectiles that have left the play volume.
//!
//! The source game never destroyed projectiles; this closes that gap.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use defender_core::components::Projectile;
use defender_core::constants::PROJECTILE_CULL_DISTANCE;
use defender_core::types::Position;

/// Remove projectiles farther than the cull distance from the origin.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let cull_sq = PROJECTILE_CULL_DISTANCE * PROJECTILE_CULL_DISTANCE;

    for (entity, (pos, _proj)) in world.query_mut::<(&Position, &Projectile)>() {
        let range_sq = pos.x * pos.x + pos.y * pos.y + pos.z * pos.z;
        if range_sq > cull_sq {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
