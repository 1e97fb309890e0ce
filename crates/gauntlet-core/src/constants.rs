//! Arena constants and tuning parameters.

// --- Arena bounds ---

/// Arena width in arena units. Valid x coordinates are `[0, ARENA_WIDTH)`.
pub const ARENA_WIDTH: f64 = 1000.0;

/// Arena height in arena units. Valid y coordinates are `[0, ARENA_HEIGHT)`.
pub const ARENA_HEIGHT: f64 = 1000.0;

// --- Drive ---

/// Maximum drive setting (percent).
pub const MAX_SPEED: i32 = 100;

/// Heading changes are only accepted at or below this speed (percent).
pub const TURN_SPEED_LIMIT: i32 = 50;

/// Arena units per second travelled per percent of speed.
pub const UNITS_PER_SPEED_PERCENT: f64 = 1.0;

// --- Scanner ---

/// Maximum half-width of the scan window (degrees).
pub const MAX_SCAN_RESOLUTION: i32 = 10;

// --- Cannon ---

/// Longest range a missile can be fired at.
pub const MAX_CANNON_RANGE: i32 = 700;

/// Missiles a single bot may have airborne at once.
pub const MAX_MISSILES_IN_FLIGHT: u8 = 2;

/// Missile speed in arena units per second.
pub const MISSILE_SPEED: f64 = 100.0;

// --- Damage ---

/// Damage at which a bot is destroyed (percent).
pub const MAX_DAMAGE: u8 = 100;

/// Blast rings as (radius, damage percent), innermost first.
pub const BLAST_RINGS: [(f64, u8); 3] = [(5.0, 10), (20.0, 5), (40.0, 3)];

/// Two bots closer than this have collided.
pub const COLLISION_RADIUS: f64 = 10.0;

/// Damage each participant takes from a collision (percent).
pub const COLLISION_DAMAGE: u8 = 2;

// --- Capability API ---

/// Upper bound for the `rand` capability.
pub const RAND_MAX: i32 = 32767;

/// Default rng seed.
pub const DEFAULT_SEED: u64 = 42;
