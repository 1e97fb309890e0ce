//! ECS systems that operate on the arena world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only
//! passes). They do not own state; all state lives in components.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod scan;
pub mod snapshot;
pub mod weapons;
