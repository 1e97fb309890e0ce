//! Engine configuration.
//!
//! Every field has a default, so a host can deserialize a partial JSON
//! document and get the reference rules for everything it leaves out.

use serde::{Deserialize, Serialize};

use gauntlet_core::constants::*;
use gauntlet_core::enums::{AngleInput, BearingConvention, FaultPolicy};

/// Where per-tick elapsed time comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClockSource {
    /// Sample a monotonic clock at every tick entry.
    Monotonic,
    /// Every tick lasts exactly `dt_secs`.
    Fixed { dt_secs: f64 },
}

/// Configuration for a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for placement and the `rand` capability. Same seed = same match.
    pub seed: u64,
    pub clock: ClockSource,
    pub bearing: BearingConvention,
    pub angle_input: AngleInput,
    pub fault_policy: FaultPolicy,
    /// Wall-clock budget for a single init/execute call. `None` = unbounded.
    pub behavior_budget_ms: Option<u64>,
    /// Ticks after which the match is declared a draw. `None` = no limit.
    pub cycle_limit: Option<u64>,
    /// Blast rings as (radius, damage percent), innermost first.
    pub blast_rings: Vec<(f64, u8)>,
    pub collision_radius: f64,
    pub collision_damage: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            clock: ClockSource::Monotonic,
            bearing: BearingConvention::default(),
            angle_input: AngleInput::default(),
            fault_policy: FaultPolicy::default(),
            behavior_budget_ms: None,
            cycle_limit: None,
            blast_rings: BLAST_RINGS.to_vec(),
            collision_radius: COLLISION_RADIUS,
            collision_damage: COLLISION_DAMAGE,
        }
    }
}

impl SimConfig {
    /// Deterministic config: fixed `dt_secs` per tick and the given seed.
    pub fn fixed_step(seed: u64, dt_secs: f64) -> Self {
        Self {
            seed,
            clock: ClockSource::Fixed { dt_secs },
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
