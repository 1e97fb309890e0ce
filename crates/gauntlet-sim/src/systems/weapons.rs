//! Cannon admission and missile flight.

use hecs::{ComponentError, Entity, World};
use tracing::debug;

use gauntlet_core::components::{Cannon, Hull, Identity, Missile};
use gauntlet_core::constants::{MAX_CANNON_RANGE, MAX_MISSILES_IN_FLIGHT, MISSILE_SPEED};
use gauntlet_core::events::ArenaEvent;
use gauntlet_core::types::{BotId, Position};

use crate::config::SimConfig;
use crate::systems::movement;
use crate::world_setup::BotIndex;

/// Remaining range at or below this counts as spent. Absorbs float noise
/// when a missile travels exactly its budget.
const SPENT_RANGE: f64 = 1e-6;

/// Try to fire a missile from `shooter`. Returns false, changing nothing,
/// if the shooter is disabled or already has the maximum in flight.
pub fn fire_cannon(
    world: &mut World,
    shooter: Entity,
    degree: i32,
    range: i32,
    config: &SimConfig,
    events: &mut Vec<ArenaEvent>,
) -> Result<bool, ComponentError> {
    let heading = config.angle_input.apply(degree);
    let range = range.clamp(0, MAX_CANNON_RANGE);

    let (owner, origin) = {
        if !world.get::<&Hull>(shooter)?.status.is_alive() {
            return Ok(false);
        }
        let mut cannon = world.get::<&mut Cannon>(shooter)?;
        if cannon.in_flight >= MAX_MISSILES_IN_FLIGHT {
            return Ok(false);
        }
        cannon.in_flight += 1;
        (
            world.get::<&Identity>(shooter)?.id,
            *world.get::<&Position>(shooter)?,
        )
    };

    world.spawn((
        origin,
        Missile {
            owner,
            heading,
            speed: MISSILE_SPEED,
            range: f64::from(range),
            dead: false,
        },
    ));

    debug!(bot = owner.0, heading, range, "missile fired");
    events.push(ArenaEvent::MissileFired {
        owner,
        heading,
        range,
    });
    Ok(true)
}

/// Fly every live missile for one tick.
///
/// Range is spent by the distance actually covered after wall clamping.
/// A missile detonates when its range is spent or when a wall stops it.
/// Detonated missiles are only marked dead here; cleanup removes them at
/// the start of the next tick.
pub fn run(world: &mut World, index: &BotIndex, dt: f64, events: &mut Vec<ArenaEvent>) {
    let mut detonated: Vec<(BotId, Position)> = Vec::new();

    for (_entity, (missile, position)) in world.query_mut::<(&mut Missile, &mut Position)>() {
        if missile.dead {
            continue;
        }

        let start = *position;
        let stopped = movement::advance(position, missile.heading, missile.speed, dt);
        missile.range -= start.range_to(position);

        if missile.range <= SPENT_RANGE || stopped {
            missile.dead = true;
            detonated.push((missile.owner, *position));
        }
    }

    for (owner, position) in detonated {
        if let Ok(entity) = index.entity(owner) {
            if let Ok(mut cannon) = world.get::<&mut Cannon>(entity) {
                cannon.in_flight = cannon.in_flight.saturating_sub(1);
            }
        }
        debug!(bot = owner.0, x = position.x, y = position.y, "missile detonated");
        events.push(ArenaEvent::Detonation { owner, position });
    }
}
