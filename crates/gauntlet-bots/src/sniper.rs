//! Sniper: holes up near a corner, from where the whole field lies inside a
//! 90 degree arc, and sweeps that arc with a narrow scanner. It fires at
//! anything in cannon range and relocates when hit or when a full sweep
//! comes up empty.

use tracing::debug;

use gauntlet_core::constants::MAX_CANNON_RANGE;
use gauntlet_sim::{BotApi, BotBehavior};

use crate::nav::Course;

/// Corner positions and the compass heading where each one's sweep starts.
const CORNERS: [((i32, i32), i32); 4] = [
    ((10, 10), 0),
    ((990, 10), 270),
    ((10, 990), 90),
    ((990, 990), 180),
];
const ARC: i32 = 90;
const SWEEP_STEP: i32 = 2;
const SCAN_RESOLUTION: i32 = 1;
const ARRIVAL_TOLERANCE: i32 = 10;

#[derive(Debug, Default)]
pub struct Sniper {
    corner: usize,
    /// Set while relocating.
    course: Option<Course>,
    /// Offset into the current arc.
    offset: i32,
    last_damage: i32,
}

impl Sniper {
    fn scan_heading(&self) -> i32 {
        (CORNERS[self.corner].1 + self.offset) % 360
    }

    /// Pick a different corner at random and start driving there.
    fn relocate(&mut self, api: &mut BotApi<'_>) {
        let pick = api.rand(CORNERS.len() as i32) as usize;
        self.corner = if pick == self.corner {
            (pick + 1) % CORNERS.len()
        } else {
            pick
        };
        self.course = Some(Course::new(CORNERS[self.corner].0, ARRIVAL_TOLERANCE));
        self.offset = 0;
        debug!(bot = api.id().0, corner = self.corner, "sniper relocating");
    }
}

impl BotBehavior for Sniper {
    fn init(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        self.last_damage = api.damage();
        self.relocate(api);
        Ok(())
    }

    fn execute(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        if let Some(course) = self.course.as_mut() {
            if course.follow(api) {
                self.course = None;
                self.offset = 0;
            }
        }

        let heading = self.scan_heading();
        let range = api.scan(heading, SCAN_RESOLUTION);
        if range > 0 && range <= MAX_CANNON_RANGE {
            // Hold the heading while the target stays put.
            api.cannon(heading, range);
        } else {
            self.offset += SWEEP_STEP;
            if self.offset > ARC {
                self.offset = 0;
                if self.course.is_none() {
                    self.relocate(api);
                }
            }
        }

        let damage = api.damage();
        if damage != self.last_damage {
            self.last_damage = damage;
            if self.course.is_none() {
                api.trace(format!("hit, now at {damage}%"));
                self.relocate(api);
            }
        }
        Ok(())
    }
}
