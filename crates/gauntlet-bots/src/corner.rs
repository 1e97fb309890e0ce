//! Corner runner: laps four waypoints set in from the arena corners.

use gauntlet_sim::{BotApi, BotBehavior};

use crate::nav::Course;

pub const WAYPOINTS: [(i32, i32); 4] = [(250, 250), (750, 250), (750, 750), (250, 750)];
const ARRIVAL_TOLERANCE: i32 = 5;

#[derive(Debug)]
pub struct CornerRunner {
    next: usize,
    course: Course,
}

impl Default for CornerRunner {
    fn default() -> Self {
        Self {
            next: 0,
            course: Course::new(WAYPOINTS[0], ARRIVAL_TOLERANCE),
        }
    }
}

impl BotBehavior for CornerRunner {
    fn init(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        api.trace("corner runner is alive");
        Ok(())
    }

    fn execute(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        if self.course.follow(api) {
            self.next = (self.next + 1) % WAYPOINTS.len();
            let (x, y) = WAYPOINTS[self.next];
            api.trace(format!("reached waypoint, heading for ({x}, {y})"));
            self.course = Course::new((x, y), ARRIVAL_TOLERANCE);
        }
        Ok(())
    }
}
