//! The capability API: everything a bot is allowed to sense or change.
//!
//! `Capabilities` is the id-indexed surface over engine state. Every call
//! sanitizes its arguments (clamp, never reject) and resolves ids through
//! the `BotIndex`; an unknown id surfaces as `ApiError` because ids are
//! engine-owned and never chosen by behaviors.
//!
//! `BotApi` is what a behavior actually receives: `Capabilities` bound to
//! the calling bot's own id, with infallible signatures.

use std::fmt::Display;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};

use gauntlet_core::components::{Drive, Hull, Identity};
use gauntlet_core::constants::*;
use gauntlet_core::events::ArenaEvent;
use gauntlet_core::geometry;
use gauntlet_core::types::{BotId, Position};

use crate::config::SimConfig;
use crate::error::ApiError;
use crate::systems::{scan, weapons};
use crate::world_setup::BotIndex;

/// Id-indexed access to the arena for the duration of one call.
pub struct Capabilities<'w> {
    pub(crate) world: &'w mut World,
    pub(crate) index: &'w BotIndex,
    pub(crate) rng: &'w mut ChaCha8Rng,
    pub(crate) config: &'w SimConfig,
    pub(crate) events: &'w mut Vec<ArenaEvent>,
}

impl<'w> Capabilities<'w> {
    fn entity(&self, id: BotId) -> Result<Entity, ApiError> {
        self.index.entity(id)
    }

    /// Set heading and speed. Speed is always taken (clamped to 0..=100);
    /// the heading only when that speed is at most 50.
    pub fn drive(&mut self, id: BotId, degree: i32, speed: i32) -> Result<(), ApiError> {
        let entity = self.entity(id)?;
        let speed = speed.clamp(0, MAX_SPEED);
        let heading = self.config.angle_input.apply(degree);

        let mut drive = self
            .world
            .get::<&mut Drive>(entity)
            .map_err(|_| ApiError::UnknownBot(id))?;
        drive.speed = speed;
        if speed <= TURN_SPEED_LIMIT {
            drive.heading = heading;
        }
        Ok(())
    }

    /// Damage taken so far, percent.
    pub fn damage(&self, id: BotId) -> Result<i32, ApiError> {
        let entity = self.entity(id)?;
        self.world
            .get::<&Hull>(entity)
            .map(|hull| i32::from(hull.damage))
            .map_err(|_| ApiError::UnknownBot(id))
    }

    /// Current speed setting, percent.
    pub fn speed(&self, id: BotId) -> Result<i32, ApiError> {
        let entity = self.entity(id)?;
        self.world
            .get::<&Drive>(entity)
            .map(|drive| drive.speed)
            .map_err(|_| ApiError::UnknownBot(id))
    }

    fn position(&self, id: BotId) -> Result<Position, ApiError> {
        let entity = self.entity(id)?;
        self.world
            .get::<&Position>(entity)
            .map(|pos| *pos)
            .map_err(|_| ApiError::UnknownBot(id))
    }

    /// x coordinate, truncated to `0..=999`.
    pub fn location_x(&self, id: BotId) -> Result<i32, ApiError> {
        Ok(self.position(id)?.x as i32)
    }

    /// y coordinate, truncated to `0..=999`.
    pub fn location_y(&self, id: BotId) -> Result<i32, ApiError> {
        Ok(self.position(id)?.y as i32)
    }

    /// See [`scan::scan`].
    pub fn scan(&mut self, id: BotId, degree: i32, resolution: i32) -> Result<i32, ApiError> {
        let entity = self.entity(id)?;
        scan::scan(self.world, entity, degree, resolution, self.config)
            .map_err(|_| ApiError::UnknownBot(id))
    }

    /// See [`weapons::fire_cannon`].
    pub fn fire_cannon(&mut self, id: BotId, degree: i32, range: i32) -> Result<bool, ApiError> {
        let entity = self.entity(id)?;
        weapons::fire_cannon(self.world, entity, degree, range, self.config, self.events)
            .map_err(|_| ApiError::UnknownBot(id))
    }

    pub fn name(&self, id: BotId) -> Result<String, ApiError> {
        let entity = self.entity(id)?;
        self.world
            .get::<&Identity>(entity)
            .map(|identity| identity.name.clone())
            .map_err(|_| ApiError::UnknownBot(id))
    }

    pub fn set_name(&mut self, id: BotId, name: &str) -> Result<(), ApiError> {
        let entity = self.entity(id)?;
        let mut identity = self
            .world
            .get::<&mut Identity>(entity)
            .map_err(|_| ApiError::UnknownBot(id))?;
        identity.name = name.to_string();
        Ok(())
    }

    /// Uniform integer in `[0, limit)`; `limit` is capped at 32767 and
    /// anything below 1 yields 0.
    pub fn rand(&mut self, limit: i32) -> i32 {
        let limit = limit.min(RAND_MAX);
        if limit <= 0 {
            return 0;
        }
        self.rng.gen_range(0..limit)
    }

    /// Heading from `(x1, y1)` toward `(x2, y2)` in whole degrees, using the
    /// same convention as the scanner.
    pub fn plot_course(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
        geometry::bearing_degrees(
            &Position::new(f64::from(x1), f64::from(y1)),
            &Position::new(f64::from(x2), f64::from(y2)),
            self.config.bearing,
        )
    }
}

/// The capability surface handed to a behavior, bound to its own bot.
///
/// Calls never fail from the behavior's point of view. An unresolvable id
/// is an engine bug: debug builds stop right there, release builds log it
/// and answer with a neutral value.
pub struct BotApi<'w> {
    caps: Capabilities<'w>,
    me: BotId,
}

fn fail_closed<T: Default>(result: Result<T, ApiError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            debug_assert!(false, "capability call failed: {err}");
            error!(%err, "capability call failed");
            T::default()
        }
    }
}

impl<'w> BotApi<'w> {
    pub(crate) fn new(caps: Capabilities<'w>, me: BotId) -> Self {
        Self { caps, me }
    }

    /// This bot's id.
    pub fn id(&self) -> BotId {
        self.me
    }

    pub fn drive(&mut self, degree: i32, speed: i32) {
        fail_closed(self.caps.drive(self.me, degree, speed));
    }

    pub fn damage(&self) -> i32 {
        fail_closed(self.caps.damage(self.me))
    }

    pub fn speed(&self) -> i32 {
        fail_closed(self.caps.speed(self.me))
    }

    pub fn location_x(&self) -> i32 {
        fail_closed(self.caps.location_x(self.me))
    }

    pub fn location_y(&self) -> i32 {
        fail_closed(self.caps.location_y(self.me))
    }

    /// Range to the nearest bot within `degree ± resolution`, or 0.
    pub fn scan(&mut self, degree: i32, resolution: i32) -> i32 {
        fail_closed(self.caps.scan(self.me, degree, resolution))
    }

    /// Fire a missile; false while two are already in flight.
    pub fn cannon(&mut self, degree: i32, range: i32) -> bool {
        fail_closed(self.caps.fire_cannon(self.me, degree, range))
    }

    pub fn name(&self) -> String {
        fail_closed(self.caps.name(self.me))
    }

    /// Change the display name.
    pub fn set_name(&mut self, name: &str) {
        fail_closed(self.caps.set_name(self.me, name));
    }

    /// Write a line to the engine log, tagged with this bot.
    pub fn trace(&self, message: impl Display) {
        info!(bot = self.me.0, name = %self.name(), "{message}");
    }

    pub fn rand(&mut self, limit: i32) -> i32 {
        self.caps.rand(limit)
    }

    pub fn plot_course(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
        self.caps.plot_course(x1, y1, x2, y2)
    }

    pub fn distance(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
        geometry::distance(x1, y1, x2, y2)
    }

    pub fn sqrt(&self, number: i32) -> i32 {
        geometry::isqrt(number)
    }

    pub fn sin(&self, degrees: i32) -> f64 {
        geometry::sin_deg(degrees)
    }

    pub fn cos(&self, degrees: i32) -> f64 {
        geometry::cos_deg(degrees)
    }

    pub fn tan(&self, degrees: i32) -> f64 {
        geometry::tan_deg(degrees)
    }

    pub fn atan(&self, ratio: f64) -> i32 {
        geometry::atan_deg(ratio)
    }

    pub fn reciprocal(&self, degrees: i32) -> i32 {
        geometry::reciprocal_degrees(degrees)
    }

    pub fn arena_width(&self) -> i32 {
        ARENA_WIDTH as i32
    }

    pub fn arena_height(&self) -> i32 {
        ARENA_HEIGHT as i32
    }
}
