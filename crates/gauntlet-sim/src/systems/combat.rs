//! Combat resolution: blast and collision damage, live-bot accounting.

use hecs::{ComponentError, Entity, World};
use tracing::{debug, info};

use gauntlet_core::components::{Drive, Hull, Identity, Missile};
use gauntlet_core::constants::MAX_DAMAGE;
use gauntlet_core::enums::BotStatus;
use gauntlet_core::events::ArenaEvent;
use gauntlet_core::types::{BotId, Position};

use crate::config::SimConfig;
use crate::world_setup::BotIndex;

/// Apply this tick's hits: blasts from every missile that detonated this
/// tick, then bot-on-bot collisions.
pub fn run(world: &mut World, index: &BotIndex, config: &SimConfig, events: &mut Vec<ArenaEvent>) {
    let blasts: Vec<Position> = world
        .query::<(&Missile, &Position)>()
        .iter()
        .filter(|(_, (missile, _))| missile.dead)
        .map(|(_, (_, pos))| *pos)
        .collect();

    for blast in &blasts {
        for (_, entity) in index.iter() {
            let Some(pos) = living_position(world, entity) else {
                continue;
            };
            let distance = blast.range_to(&pos);
            let ring = config
                .blast_rings
                .iter()
                .find(|(radius, _)| distance <= *radius);
            if let Some(&(_, damage)) = ring {
                let _ = apply_damage(world, entity, damage, events);
            }
        }
    }

    resolve_collisions(world, index, config, events);
}

/// Two living bots closer than the collision radius, at least one of them
/// moving, both take collision damage and every moving participant stops.
fn resolve_collisions(
    world: &mut World,
    index: &BotIndex,
    config: &SimConfig,
    events: &mut Vec<ArenaEvent>,
) {
    let bots: Vec<(BotId, Entity, Position, bool)> = index
        .iter()
        .filter_map(|(id, entity)| {
            let pos = living_position(world, entity)?;
            let moving = world.get::<&Drive>(entity).ok()?.speed > 0;
            Some((id, entity, pos, moving))
        })
        .collect();

    let mut stopped: Vec<Entity> = Vec::new();
    for (i, first) in bots.iter().enumerate() {
        for second in &bots[i + 1..] {
            if !(first.3 || second.3) || first.2.range_to(&second.2) > config.collision_radius {
                continue;
            }
            events.push(ArenaEvent::Collision {
                first: first.0,
                second: second.0,
            });
            for (_, entity, _, moving) in [first, second] {
                let _ = apply_damage(world, *entity, config.collision_damage, events);
                if *moving {
                    stopped.push(*entity);
                }
            }
        }
    }

    for entity in stopped {
        if let Ok(mut drive) = world.get::<&mut Drive>(entity) {
            drive.speed = 0;
        }
    }
}

fn living_position(world: &World, entity: Entity) -> Option<Position> {
    if !world.get::<&Hull>(entity).ok()?.status.is_alive() {
        return None;
    }
    world.get::<&Position>(entity).ok().map(|pos| *pos)
}

/// Add `amount` percent of damage, saturating at 100. A bot reaching 100 is
/// destroyed for the rest of the match. Disabled bots take no further damage.
/// Returns the bot's total damage.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    amount: u8,
    events: &mut Vec<ArenaEvent>,
) -> Result<u8, ComponentError> {
    let id = world.get::<&Identity>(entity)?.id;
    let mut hull = world.get::<&mut Hull>(entity)?;
    if !hull.status.is_alive() || amount == 0 {
        return Ok(hull.damage);
    }

    hull.damage = hull.damage.saturating_add(amount).min(MAX_DAMAGE);
    debug!(bot = id.0, amount, total = hull.damage, "bot hit");
    events.push(ArenaEvent::BotHit {
        bot: id,
        damage: amount,
        total: hull.damage,
    });

    if hull.damage >= MAX_DAMAGE {
        hull.status = BotStatus::Destroyed;
        info!(bot = id.0, "bot destroyed");
        events.push(ArenaEvent::BotDestroyed { bot: id });
    }
    Ok(hull.damage)
}

/// Ids of every bot still in play, in load order.
pub fn living_bots(world: &World, index: &BotIndex) -> Vec<BotId> {
    index
        .iter()
        .filter(|(_, entity)| {
            world
                .get::<&Hull>(*entity)
                .is_ok_and(|hull| hull.status.is_alive())
        })
        .map(|(id, _)| id)
        .collect()
}
