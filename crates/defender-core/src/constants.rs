//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz) — matches the nominal animation-frame rate.
pub const TICK_RATE: u32 = 60;

// --- Session defaults ---

/// Default number of hazards spawned at session start.
pub const DEFAULT_MAX_HAZARDS: usize = 200;

/// Default starting (and maximum) planet health.
pub const DEFAULT_MAX_HEALTH: i32 = 1000;

/// Default multiplayer headcount cap (advisory only).
pub const DEFAULT_MAX_PLAYERS: u32 = 10;

// --- Hazard spawning ---

/// Half-extent of the cube hazards spawn in, centered on the origin.
pub const HAZARD_SPAWN_HALF_EXTENT: f64 = 1000.0;

// --- Movement ---

/// Per-axis step a hazard takes toward the origin each tick.
/// A fixed-step walk, not a clamp: coordinates may oscillate around zero.
pub const HAZARD_STEP: f64 = 0.05;

/// Per-tick projectile advance along -x (toward the planet).
pub const PROJECTILE_STEP: f64 = 1.0;

// --- Proximity bands ---
// Axis-aligned cubes centered on the planet. Classification checks each
// axis against the half-extent independently, not a radial distance.

/// Outer band half-extent: entering it raises the hazard alert cue.
pub const OUTER_BAND_HALF_EXTENT: f64 = 60.0;

/// Inner band half-extent: entering it destroys the hazard and damages
/// the planet.
pub const INNER_BAND_HALF_EXTENT: f64 = 38.0;

// --- Collision effects ---

/// Health removed per hazard impact.
pub const COLLISION_PENALTY: i32 = 200;

/// Ticks the post-impact visual cue stays active before resetting.
pub const COOLDOWN_TICKS: u32 = 30;

// --- Projectiles ---

/// Muzzle offset from the craft on the x axis.
pub const PROJECTILE_SPAWN_OFFSET_X: f64 = -10.0;

/// Projectiles farther than this from the origin are culled.
pub const PROJECTILE_CULL_DISTANCE: f64 = 2000.0;

// --- Craft ---

/// Per-keypress craft delta on the x and y axes.
pub const CRAFT_STEP_XY: f64 = 2.0;

/// Per-keypress craft delta on the z axis.
pub const CRAFT_STEP_Z: f64 = 5.0;

/// Craft spawn x band: uniform in [CRAFT_SPAWN_X_MIN, MIN + SPAN).
pub const CRAFT_SPAWN_X_MIN: f64 = 100.0;
pub const CRAFT_SPAWN_X_SPAN: f64 = 200.0;

// --- Wire protocol ---

/// Event name sent to the game server on every planet impact.
pub const EARTH_COLLISION_EVENT: &str = "action_earth_collision";
