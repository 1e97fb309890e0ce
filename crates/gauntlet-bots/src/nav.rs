//! Waypoint navigation shared by the stock bots.
//!
//! A heading only takes while the commanded speed is at or below
//! `TURN_SPEED_LIMIT`, so fast bots turn slowly first and then open up.
//! Courses cruise flat out, then creep in and home on the target once
//! inside `SLOWDOWN_RANGE`.

use gauntlet_core::constants::TURN_SPEED_LIMIT;
use gauntlet_sim::BotApi;

pub const CRUISE_SPEED: i32 = 100;
pub const CREEP_SPEED: i32 = 20;
pub const SLOWDOWN_RANGE: i32 = 100;

/// Turn to `heading`, then run at `speed`.
pub fn steer(api: &mut BotApi<'_>, heading: i32, speed: i32) {
    api.drive(heading, speed.min(TURN_SPEED_LIMIT));
    if speed > TURN_SPEED_LIMIT {
        api.drive(heading, speed);
    }
}

/// Where a bot is on its way to a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Not moving yet.
    Depart,
    /// Flat out on a fixed heading.
    Cruise,
    /// Homing in slowly, heading corrected every tick.
    Approach,
    /// Stopped within the arrival tolerance.
    Arrived,
}

/// A drive to one waypoint.
#[derive(Debug, Clone)]
pub struct Course {
    target: (i32, i32),
    tolerance: i32,
    leg: Leg,
}

impl Course {
    /// Head for `target` and stop once within `tolerance` units.
    pub fn new(target: (i32, i32), tolerance: i32) -> Self {
        Self {
            target,
            tolerance,
            leg: Leg::Depart,
        }
    }

    pub fn target(&self) -> (i32, i32) {
        self.target
    }

    pub fn leg(&self) -> Leg {
        self.leg
    }

    /// Drive one tick along the course. Returns true once arrived.
    pub fn follow(&mut self, api: &mut BotApi<'_>) -> bool {
        if self.leg == Leg::Arrived {
            return true;
        }

        let (x, y) = (api.location_x(), api.location_y());
        let (tx, ty) = self.target;
        let remaining = api.distance(x, y, tx, ty);
        let heading = api.plot_course(x, y, tx, ty);

        self.leg = if remaining <= self.tolerance {
            api.drive(heading, 0);
            Leg::Arrived
        } else if remaining <= SLOWDOWN_RANGE {
            // Never faster than the gap, so coarse ticks do not overshoot.
            api.drive(heading, remaining.min(CREEP_SPEED));
            Leg::Approach
        } else {
            match self.leg {
                // Knocked to a stop by a collision: start over.
                Leg::Cruise if api.speed() > 0 => Leg::Cruise,
                _ => {
                    steer(api, heading, CRUISE_SPEED);
                    Leg::Cruise
                }
            }
        };
        self.leg == Leg::Arrived
    }
}
