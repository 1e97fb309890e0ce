//! Kinematic integration and wall containment.
//!
//! Bodies move along their heading: `x += sin(h) * v * dt`,
//! `y += cos(h) * v * dt`, then each axis is clamped into the arena.

use hecs::{ComponentError, Entity, World};

use gauntlet_core::components::{Drive, Hull, PreviousPosition};
use gauntlet_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, UNITS_PER_SPEED_PERCENT};
use gauntlet_core::types::Position;

/// Overshoot past a wall at or below this is trig rounding, not contact.
/// `cos(270°)` is about -1.8e-16, so a body sliding along a wall drifts a
/// hair outside it every step.
const WALL_TOLERANCE: f64 = 1e-9;

/// Integrate one step and clamp. Returns true if a wall stopped the body.
pub fn advance(position: &mut Position, heading: i32, speed: f64, dt: f64) -> bool {
    let radians = f64::from(heading).to_radians();
    position.x += radians.sin() * speed * dt;
    position.y += radians.cos() * speed * dt;
    let unclamped = *position;
    clamp_to_arena(position) && unclamped.range_to(position) > WALL_TOLERANCE
}

/// Clamp x into `[0, W-1]` and y into `[0, H-1]` independently.
/// Returns true if either axis was out of bounds.
pub fn clamp_to_arena(position: &mut Position) -> bool {
    let x = position.x.clamp(0.0, ARENA_WIDTH - 1.0);
    let y = position.y.clamp(0.0, ARENA_HEIGHT - 1.0);
    let clamped = x != position.x || y != position.y;
    position.x = x;
    position.y = y;
    clamped
}

/// Move a single bot by its drive setting. Disabled bots stay put.
pub fn step_bot(world: &mut World, entity: Entity, dt: f64) -> Result<(), ComponentError> {
    if !world.get::<&Hull>(entity)?.status.is_alive() {
        return Ok(());
    }
    let drive = *world.get::<&Drive>(entity)?;
    let mut position = world.get::<&mut Position>(entity)?;
    world.get::<&mut PreviousPosition>(entity)?.0 = *position;
    advance(
        &mut position,
        drive.heading,
        f64::from(drive.speed) * UNITS_PER_SPEED_PERCENT,
        dt,
    );
    Ok(())
}
