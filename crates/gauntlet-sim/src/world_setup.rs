//! Bot spawning and the id -> entity index.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gauntlet_core::components::*;
use gauntlet_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use gauntlet_core::types::{BotId, Position};

use crate::error::ApiError;

/// Dense index of bot entities in load order. Slot `n` holds `BotId(n + 1)`.
#[derive(Debug, Default, Clone)]
pub struct BotIndex {
    entities: Vec<Entity>,
}

impl BotIndex {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Resolve an id to its entity.
    pub fn entity(&self, id: BotId) -> Result<Entity, ApiError> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|slot| self.entities.get(slot))
            .copied()
            .ok_or(ApiError::UnknownBot(id))
    }

    /// `(id, entity)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (BotId, Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(slot, entity)| (BotId(slot as u32 + 1), *entity))
    }

    fn next_id(&self) -> BotId {
        BotId(self.entities.len() as u32 + 1)
    }
}

/// Uniformly random position inside the arena.
pub fn random_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(0.0..=ARENA_WIDTH - 1.0),
        rng.gen_range(0.0..=ARENA_HEIGHT - 1.0),
    )
}

/// Spawn a bot with a fresh component bundle and assign the next id.
pub fn spawn_bot(world: &mut World, index: &mut BotIndex, name: &str, position: Position) -> BotId {
    let id = index.next_id();
    let entity = world.spawn((
        Identity {
            id,
            name: name.to_string(),
        },
        position,
        PreviousPosition(position),
        Drive::default(),
        Hull::default(),
        Scanner::default(),
        Cannon::default(),
    ));
    index.entities.push(entity);
    id
}
