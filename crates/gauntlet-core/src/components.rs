//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::BotStatus;
use crate::types::{BotId, Position};

/// Who a bot is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: BotId,
    /// Display name; defaults to the module name and may be changed during init.
    pub name: String,
}

/// Current drive setting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Drive {
    /// Whole degrees, always in `0..=359`.
    pub heading: i32,
    /// Percent, `0..=100`.
    pub speed: i32,
}

/// Accumulated damage and lifecycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Hull {
    /// Percent, `0..=100`, never decreases.
    pub damage: u8,
    pub status: BotStatus,
}

/// Last scanner setting, kept for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Scanner {
    pub heading: i32,
    pub resolution: i32,
}

/// Cannon bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Cannon {
    pub in_flight: u8,
}

/// Position at the start of the last movement step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PreviousPosition(pub Position);

/// A cannon round in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Missile {
    pub owner: BotId,
    pub heading: i32,
    /// Arena units per second.
    pub speed: f64,
    /// Distance left before detonation.
    pub range: f64,
    /// Detonated; swept at the start of the next tick.
    pub dead: bool,
}
