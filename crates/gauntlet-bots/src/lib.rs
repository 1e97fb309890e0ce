//! Stock bots for the Gauntlet arena.
//!
//! Ready-made opponents for tests and hosts: a stationary scout, two
//! east-west shuttles, a waypoint runner and a corner sniper. [`registry`]
//! registers all of them under their module names.

pub mod corner;
pub mod nav;
pub mod scout;
pub mod shuttle;
pub mod sniper;

pub use gauntlet_core as core;

use gauntlet_sim::{BehaviorRegistry, BotBehavior};

/// Module names registered by [`registry`], in a sensible lineup order.
pub const STOCK_MODULES: [&str; 5] = ["scout", "shuttle", "runner", "corner", "sniper"];

/// A registry holding every stock bot.
pub fn registry() -> BehaviorRegistry {
    let mut registry = BehaviorRegistry::new();
    registry
        .register_default::<scout::Scout>("scout")
        .register_default::<shuttle::Shuttle>("shuttle")
        .register("runner", || {
            Ok(Box::new(shuttle::Shuttle::runner()) as Box<dyn BotBehavior>)
        })
        .register_default::<corner::CornerRunner>("corner")
        .register_default::<sniper::Sniper>("sniper");
    registry
}
