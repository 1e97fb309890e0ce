//! Per-tick elapsed time.

use std::time::Instant;

use crate::config::ClockSource;

/// Produces the single `dt` shared by every entity during a tick.
#[derive(Debug, Clone)]
pub enum TickClock {
    Monotonic { last: Instant },
    Fixed { dt_secs: f64 },
}

impl TickClock {
    pub fn new(source: ClockSource) -> Self {
        match source {
            ClockSource::Monotonic => TickClock::Monotonic {
                last: Instant::now(),
            },
            ClockSource::Fixed { dt_secs } => TickClock::Fixed {
                dt_secs: dt_secs.max(0.0),
            },
        }
    }

    /// Reset the reference point so the next sample starts from now.
    pub fn restart(&mut self) {
        if let TickClock::Monotonic { last } = self {
            *last = Instant::now();
        }
    }

    /// Seconds since the previous sample.
    pub fn sample(&mut self) -> f64 {
        match self {
            TickClock::Monotonic { last } => {
                let now = Instant::now();
                let dt = now.duration_since(*last).as_secs_f64();
                *last = now;
                dt
            }
            TickClock::Fixed { dt_secs } => *dt_secs,
        }
    }
}
