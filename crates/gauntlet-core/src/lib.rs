//! Core types and definitions for the Gauntlet arena.
//!
//! This crate defines the vocabulary shared across all other crates:
//! ids, positions, geometry helpers, components, snapshots, events and
//! constants. It has no engine logic.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
