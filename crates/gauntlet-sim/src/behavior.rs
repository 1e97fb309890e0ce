//! The bot controller contract and the registry that builds controllers.

use std::collections::BTreeMap;

use crate::api::BotApi;
use crate::error::ModuleFault;

/// Per-bot logic driven by the engine.
///
/// `init` runs once after the bot has its id and starting position, before
/// the first tick. `execute` runs once per tick while the bot is alive. All
/// sensing and acting goes through `api`, which is bound to this bot.
///
/// Returning an error (or panicking) is a runtime fault; what happens next
/// is decided by the engine's `FaultPolicy`.
pub trait BotBehavior: Send {
    fn init(&mut self, _api: &mut BotApi<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn execute(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()>;
}

type Factory = Box<dyn Fn() -> anyhow::Result<Box<dyn BotBehavior>> + Send + Sync>;

/// Behavior modules keyed by name.
#[derive(Default)]
pub struct BehaviorRegistry {
    factories: BTreeMap<String, Factory>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fallible factory. Re-registering a name replaces it.
    pub fn register<F>(&mut self, module: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> anyhow::Result<Box<dyn BotBehavior>> + Send + Sync + 'static,
    {
        self.factories.insert(module.into(), Box::new(factory));
        self
    }

    /// Register a behavior type built with `Default`.
    pub fn register_default<B>(&mut self, module: impl Into<String>) -> &mut Self
    where
        B: BotBehavior + Default + 'static,
    {
        self.register(module, || Ok(Box::new(B::default()) as Box<dyn BotBehavior>))
    }

    pub fn contains(&self, module: &str) -> bool {
        self.factories.contains_key(module)
    }

    /// Registered module names, sorted.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build a fresh controller for `module`.
    pub fn instantiate(&self, module: &str) -> Result<Box<dyn BotBehavior>, ModuleFault> {
        let factory = self.factories.get(module).ok_or_else(|| ModuleFault {
            module: module.to_string(),
            reason: "no such behavior module".to_string(),
        })?;
        factory().map_err(|err| ModuleFault {
            module: module.to_string(),
            reason: format!("{err:#}"),
        })
    }
}
