//! Scout: never moves or fires, just sweeps the scanner around the compass.

use gauntlet_sim::{BotApi, BotBehavior};

const SWEEP_STEP: i32 = 20;
const SCAN_RESOLUTION: i32 = 10;

#[derive(Debug, Default)]
pub struct Scout {
    sweep: i32,
}

impl BotBehavior for Scout {
    fn execute(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        let range = api.scan(self.sweep, SCAN_RESOLUTION);
        if range > 0 {
            api.trace(format!("contact at {} degrees, range {range}", self.sweep));
        }
        self.sweep = (self.sweep + SWEEP_STEP) % 360;
        Ok(())
    }
}
