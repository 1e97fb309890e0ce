//! Scanner: nearest living bot inside an angular window.

use hecs::{ComponentError, Entity, World};

use gauntlet_core::components::{Hull, Scanner};
use gauntlet_core::constants::MAX_SCAN_RESOLUTION;
use gauntlet_core::geometry::{angular_offset, bearing_degrees};
use gauntlet_core::types::Position;

use crate::config::SimConfig;

/// Scan from `observer` toward `degree` with a half-width of `resolution`.
///
/// Returns the truncated range to the nearest living bot whose bearing lies
/// within the window, or 0 if there is none. The window is compared on the
/// circle, so a scan at 0 with resolution 10 also covers 350..=359.
/// Records the (sanitized) scan setting on the observer.
pub fn scan(
    world: &mut World,
    observer: Entity,
    degree: i32,
    resolution: i32,
    config: &SimConfig,
) -> Result<i32, ComponentError> {
    let center = config.angle_input.apply(degree);
    let resolution = resolution.clamp(0, MAX_SCAN_RESOLUTION);

    {
        let mut scanner = world.get::<&mut Scanner>(observer)?;
        scanner.heading = center;
        scanner.resolution = resolution;
    }

    let origin = *world.get::<&Position>(observer)?;

    let nearest = world
        .query::<(&Position, &Hull)>()
        .iter()
        .filter(|(entity, (_, hull))| *entity != observer && hull.status.is_alive())
        .filter_map(|(_, (pos, _))| {
            let bearing = bearing_degrees(&origin, pos, config.bearing);
            (angular_offset(bearing, center) <= resolution).then(|| origin.range_to(pos))
        })
        .min_by(|a, b| a.total_cmp(b));

    Ok(nearest.map_or(0, |range| range as i32))
}
