//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::BotId;

/// Lifecycle of a single bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotStatus {
    #[default]
    Active,
    /// Damage reached 100%.
    Destroyed,
    /// Disqualified after its behavior faulted.
    Forfeited,
}

impl BotStatus {
    pub fn is_alive(self) -> bool {
        self == BotStatus::Active
    }
}

/// Match lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No bots loaded yet.
    #[default]
    Setup,
    Running,
    /// At most one bot left alive, or the cycle limit was reached.
    Finished,
    /// A behavior fault ended the match under `FaultPolicy::Abort`.
    Aborted,
}

/// How a finished match ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchOutcome {
    Winner { bot: BotId },
    Draw,
    Aborted { bot: BotId, reason: String },
}

/// Mapping from a point pair to a heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BearingConvention {
    /// Same convention as movement: `atan2(dx, dy)`.
    #[default]
    Compass,
    /// `(atan2(dy, dx) + pi) * 360 / 2pi`.
    Legacy,
}

/// How out-of-range degree arguments are brought into `0..=359`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleInput {
    #[default]
    Clamp,
    Wrap,
}

/// What happens when a behavior faults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultPolicy {
    /// Forfeit the offending bot and keep playing.
    #[default]
    Disqualify,
    /// End the whole match.
    Abort,
}

/// Where in the behavior contract a fault happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultStage {
    Init,
    Execute,
}

impl AngleInput {
    /// Bring a degree argument into `0..=359`.
    pub fn apply(self, degrees: i32) -> i32 {
        match self {
            AngleInput::Clamp => crate::geometry::clamp_degrees(degrees),
            AngleInput::Wrap => crate::geometry::normalize_degrees(degrees),
        }
    }
}
