//! Kinematic systems: projectile advance and the hazard drift walk.
//!
//! Both are collision-unaware; proximity classification happens in the
//! collision system before hazards move.

use hecs::World;

use defender_core::components::{Hazard, Projectile};
use defender_core::constants::{HAZARD_STEP, PROJECTILE_STEP};
use defender_core::types::Position;

/// Advance every projectile along -x by the fixed step.
pub fn run_projectiles(world: &mut World) {
    for (_entity, (pos, _proj)) in world.query_mut::<(&mut Position, &Projectile)>() {
        pos.x -= PROJECTILE_STEP;
    }
}

/// Walk every hazard toward the origin by a fixed step per axis.
///
/// Each coordinate moves by `HAZARD_STEP` in the direction of zero,
/// chosen from its current sign. This is an asymptotic fixed-step walk,
/// not a clamp: a coordinate within one step of zero oscillates around
/// it indefinitely. A coordinate at exactly zero steps negative.
pub fn run_hazards(world: &mut World) {
    for (_entity, (pos, _hazard)) in world.query_mut::<(&mut Position, &Hazard)>() {
        pos.x += step_toward_zero(pos.x);
        pos.y += step_toward_zero(pos.y);
        pos.z += step_toward_zero(pos.z);
    }
}

fn step_toward_zero(coord: f64) -> f64 {
    if coord < 0.0 {
        HAZARD_STEP
    } else {
        -HAZARD_STEP
    }
}
