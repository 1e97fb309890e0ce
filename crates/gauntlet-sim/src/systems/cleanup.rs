//! Cleanup system: removes missiles that detonated during the previous tick.

use hecs::{Entity, World};

use gauntlet_core::components::Missile;

/// Despawn every dead missile. Runs first thing in a tick, so a missile that
/// detonated last tick stayed visible to that tick's combat resolution and
/// snapshot. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, missile) in world.query_mut::<&Missile>() {
        if missile.dead {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
