//! Snapshot system: queries the ECS world and builds an `ArenaSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use gauntlet_core::components::*;
use gauntlet_core::enums::{MatchOutcome, MatchPhase};
use gauntlet_core::events::ArenaEvent;
use gauntlet_core::state::*;
use gauntlet_core::types::{Position, SimTime};

use crate::world_setup::BotIndex;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    index: &BotIndex,
    time: SimTime,
    phase: MatchPhase,
    outcome: Option<MatchOutcome>,
    events: Vec<ArenaEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time,
        phase,
        outcome,
        bots: build_bots(world, index),
        missiles: build_missiles(world),
        events,
    }
}

/// One view per bot, in load order. Disabled bots are included.
fn build_bots(world: &World, index: &BotIndex) -> Vec<BotView> {
    index
        .iter()
        .filter_map(|(_, entity)| {
            let mut query = world
                .query_one::<(
                    &Identity,
                    &Position,
                    &PreviousPosition,
                    &Drive,
                    &Hull,
                    &Scanner,
                    &Cannon,
                )>(entity)
                .ok()?;
            let (identity, position, previous, drive, hull, scanner, cannon) = query.get()?;
            Some(BotView {
                id: identity.id,
                name: identity.name.clone(),
                position: *position,
                previous_position: previous.0,
                heading: drive.heading,
                speed: drive.speed,
                damage: hull.damage,
                scan_heading: scanner.heading,
                scan_resolution: scanner.resolution,
                missiles_in_flight: cannon.in_flight,
                status: hull.status,
            })
        })
        .collect()
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<(u32, MissileView)> = world
        .query::<(&Missile, &Position)>()
        .iter()
        .map(|(entity, (missile, position))| {
            (
                entity.id(),
                MissileView {
                    owner: missile.owner,
                    position: *position,
                    heading: missile.heading,
                    range: missile.range,
                    dead: missile.dead,
                },
            )
        })
        .collect();

    // Stable order regardless of archetype layout.
    missiles.sort_by_key(|(id, _)| *id);
    missiles.into_iter().map(|(_, view)| view).collect()
}
