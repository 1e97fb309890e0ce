//! Engine error types.

use std::fmt;

use gauntlet_core::types::BotId;

/// A match could not be set up.
#[derive(Debug)]
pub enum LoadError {
    /// No behavior modules were given.
    Empty,
    /// Bots were already loaded into this engine.
    AlreadyLoaded,
    /// One or more modules failed to instantiate. All modules are attempted.
    Modules(Vec<ModuleFault>),
}

/// Why a single behavior module failed to load.
#[derive(Debug)]
pub struct ModuleFault {
    pub module: String,
    pub reason: String,
}

/// An id-indexed capability call referenced a bot the engine does not own.
/// Ids are engine-assigned, so this is always an engine bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    UnknownBot(BotId),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Empty => write!(f, "no behavior modules given"),
            LoadError::AlreadyLoaded => write!(f, "bots are already loaded"),
            LoadError::Modules(faults) => {
                write!(f, "{} module(s) failed to load", faults.len())?;
                for fault in faults {
                    write!(f, "; {fault}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ModuleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.module, self.reason)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnknownBot(id) => write!(f, "unknown bot {id}"),
        }
    }
}

impl std::error::Error for LoadError {}
impl std::error::Error for ModuleFault {}
impl std::error::Error for ApiError {}
