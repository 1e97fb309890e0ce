//! Battle simulation engine for Gauntlet.
//!
//! Owns the hecs ECS world, hosts bot behaviors behind the capability API,
//! runs the per-tick systems and produces `ArenaSnapshot`s for hosts.

pub mod api;
pub mod behavior;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod systems;
pub mod world_setup;

pub use api::{BotApi, Capabilities};
pub use behavior::{BehaviorRegistry, BotBehavior};
pub use config::SimConfig;
pub use engine::BattleEngine;
pub use host::MatchHost;
pub use error::{ApiError, LoadError, ModuleFault};
pub use gauntlet_core as core;
