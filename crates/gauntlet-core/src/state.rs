//! Arena snapshot: the complete visible state handed to hosts each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BotStatus, MatchOutcome, MatchPhase};
use crate::events::ArenaEvent;
use crate::types::{BotId, Position, SimTime};

/// Read-only view of the arena after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub outcome: Option<MatchOutcome>,
    /// In load order.
    pub bots: Vec<BotView>,
    pub missiles: Vec<MissileView>,
    /// Events raised during the last tick. The first tick also carries
    /// events raised while loading.
    pub events: Vec<ArenaEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotView {
    pub id: BotId,
    pub name: String,
    pub position: Position,
    pub previous_position: Position,
    pub heading: i32,
    pub speed: i32,
    pub damage: u8,
    pub scan_heading: i32,
    pub scan_resolution: i32,
    pub missiles_in_flight: u8,
    pub status: BotStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub owner: BotId,
    pub position: Position,
    pub heading: i32,
    pub range: f64,
    pub dead: bool,
}

impl ArenaSnapshot {
    /// Look up a bot view by id.
    pub fn bot(&self, id: BotId) -> Option<&BotView> {
        self.bots.iter().find(|b| b.id == id)
    }
}
