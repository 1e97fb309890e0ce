//! Events emitted by the simulation during a tick.

use serde::{Deserialize, Serialize};

use crate::enums::{FaultStage, MatchOutcome};
use crate::types::{BotId, Position};

/// Something noteworthy that happened this tick, for hosts and renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    MissileFired {
        owner: BotId,
        heading: i32,
        range: i32,
    },
    Detonation {
        owner: BotId,
        position: Position,
    },
    BotHit {
        bot: BotId,
        damage: u8,
        total: u8,
    },
    Collision {
        first: BotId,
        second: BotId,
    },
    BotDestroyed {
        bot: BotId,
    },
    BehaviorFault {
        bot: BotId,
        stage: FaultStage,
        reason: String,
    },
    MatchOver {
        outcome: MatchOutcome,
    },
}
