//! Post-impact cooldown counter.
//!
//! While the counter is above zero the "just hit" visual cue stays
//! active. The reset event fires on the 1 -> 0 edge only; repeated
//! ticks at zero never re-fire it.

use defender_core::events::GameEvent;

/// Decrement the cooldown counter and emit the reset cue on expiry.
pub fn run(cooldown: &mut u32, events: &mut Vec<GameEvent>) {
    if *cooldown == 0 {
        return;
    }
    *cooldown -= 1;
    if *cooldown == 0 {
        events.push(GameEvent::CooldownExpired);
    }
}
