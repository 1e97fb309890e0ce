//! Host loop: drives a loaded engine tick by tick.
//!
//! The engine never sleeps; pacing is the host's job. Cancellation is
//! coarse: a host simply stops ticking.

use std::time::Duration;

use tracing::info;

use gauntlet_core::enums::MatchOutcome;
use gauntlet_core::state::ArenaSnapshot;

use crate::engine::BattleEngine;

/// Runs a match to completion, optionally paced and capped.
pub struct MatchHost {
    engine: BattleEngine,
    /// Pause between ticks. `None` runs flat out.
    pub tick_delay: Option<Duration>,
    /// Stop after this many ticks even if the match is undecided.
    pub max_ticks: Option<u64>,
}

impl MatchHost {
    pub fn new(engine: BattleEngine) -> Self {
        Self {
            engine,
            tick_delay: None,
            max_ticks: None,
        }
    }

    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    pub fn into_engine(self) -> BattleEngine {
        self.engine
    }

    /// Tick until the match ends or the tick cap is hit, handing every
    /// post-tick snapshot to `on_tick`. Returns the outcome, if decided.
    pub fn run<F>(&mut self, mut on_tick: F) -> Option<MatchOutcome>
    where
        F: FnMut(&ArenaSnapshot),
    {
        let mut ticks = 0u64;
        loop {
            let continues = self.engine.tick();
            ticks += 1;
            on_tick(&self.engine.snapshot());

            if !continues {
                break;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                info!(ticks, "tick cap reached, leaving match undecided");
                break;
            }
            if let Some(delay) = self.tick_delay {
                std::thread::sleep(delay);
            }
        }
        self.engine.outcome().cloned()
    }
}
