//! Shuttle: runs east and west across the arena, turning back before it
//! reaches a wall. The gunner variant sweeps its scanner in steps while it
//! runs and fires at anything it finds.

use gauntlet_sim::{BotApi, BotBehavior};

/// Turn back this close to a side wall.
const WALL_MARGIN: i32 = 50;
const SWEEP_STEP: i32 = 10;
const EAST: i32 = 90;
const WEST: i32 = 270;

#[derive(Debug, Clone)]
pub struct Shuttle {
    speed: i32,
    heading: i32,
    /// Scanner resolution; `None` for an unarmed shuttle.
    scan_resolution: Option<i32>,
    sweep: i32,
}

impl Shuttle {
    /// Slow shuttle that hunts while it runs.
    pub fn gunner() -> Self {
        Self {
            speed: 25,
            heading: EAST,
            scan_resolution: Some(5),
            sweep: 0,
        }
    }

    /// Faster shuttle that never shoots; a moving target.
    pub fn runner() -> Self {
        Self {
            speed: 50,
            heading: EAST,
            scan_resolution: None,
            sweep: 0,
        }
    }

    pub fn heading(&self) -> i32 {
        self.heading
    }
}

impl Default for Shuttle {
    fn default() -> Self {
        Self::gunner()
    }
}

impl BotBehavior for Shuttle {
    fn execute(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        let x = api.location_x();
        let turn = if x < WALL_MARGIN {
            Some(EAST)
        } else if x > api.arena_width() - WALL_MARGIN {
            Some(WEST)
        } else {
            None
        };

        if let Some(heading) = turn.filter(|heading| *heading != self.heading) {
            self.heading = heading;
            api.drive(heading, self.speed);
            api.trace(format!("turning to {heading}"));
        }
        if api.speed() == 0 {
            api.drive(self.heading, self.speed);
        }

        if let Some(resolution) = self.scan_resolution {
            let range = api.scan(self.sweep, resolution);
            if range > 0 && api.cannon(self.sweep, range) {
                api.trace(format!("firing at {} degrees, range {range}", self.sweep));
            }
            self.sweep = (self.sweep + SWEEP_STEP) % 360;
        }
        Ok(())
    }
}
