//! Battle engine: the core of the arena.
//!
//! `BattleEngine` owns the hecs world, the bot behaviors and the rng, runs
//! every system once per tick in a fixed order and produces
//! `ArenaSnapshot`s. Completely headless, so a fixed-step clock and a seed
//! make a match fully reproducible.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, trace, warn};

use gauntlet_core::components::Hull;
use gauntlet_core::enums::{BotStatus, FaultPolicy, FaultStage, MatchOutcome, MatchPhase};
use gauntlet_core::events::ArenaEvent;
use gauntlet_core::state::ArenaSnapshot;
use gauntlet_core::types::{BotId, Position, SimTime};

use crate::api::{BotApi, Capabilities};
use crate::behavior::{BehaviorRegistry, BotBehavior};
use crate::clock::TickClock;
use crate::config::SimConfig;
use crate::error::{ApiError, LoadError};
use crate::systems;
use crate::systems::movement;
use crate::world_setup::{self, BotIndex};

/// The battle engine. Owns the ECS world and all match state.
pub struct BattleEngine {
    world: World,
    index: BotIndex,
    /// Slot `n` drives `BotId(n + 1)`.
    behaviors: Vec<Box<dyn BotBehavior>>,
    config: SimConfig,
    clock: TickClock,
    time: SimTime,
    phase: MatchPhase,
    outcome: Option<MatchOutcome>,
    rng: ChaCha8Rng,
    events: Vec<ArenaEvent>,
    /// Set by loading so `init` faults reach the first tick's snapshot.
    keep_load_events: bool,
    despawn_buffer: Vec<Entity>,
}

impl BattleEngine {
    /// Create an empty engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            index: BotIndex::default(),
            behaviors: Vec::new(),
            clock: TickClock::new(config.clock),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: MatchPhase::default(),
            outcome: None,
            events: Vec::new(),
            keep_load_events: false,
            despawn_buffer: Vec::new(),
        }
    }

    /// Instantiate `modules` from the registry and start the match.
    ///
    /// Every module is attempted so all faults are reported together; if
    /// any fails the match never starts.
    pub fn load(&mut self, registry: &BehaviorRegistry, modules: &[&str]) -> Result<(), LoadError> {
        if !self.index.is_empty() {
            return Err(LoadError::AlreadyLoaded);
        }

        let mut contestants = Vec::with_capacity(modules.len());
        let mut faults = Vec::new();
        for module in modules {
            match registry.instantiate(module) {
                Ok(behavior) => contestants.push((module.to_string(), behavior)),
                Err(fault) => {
                    warn!(module = %fault.module, reason = %fault.reason, "behavior failed to load");
                    faults.push(fault);
                }
            }
        }

        if !faults.is_empty() {
            return Err(LoadError::Modules(faults));
        }
        self.load_behaviors(contestants)
    }

    /// Start the match with already-built behaviors, `(display name, behavior)`
    /// in load order. Ids are assigned 1..=N, each bot is placed uniformly at
    /// random, then every behavior's `init` runs once. Events raised here
    /// are reported again with the first tick.
    pub fn load_behaviors(
        &mut self,
        contestants: Vec<(String, Box<dyn BotBehavior>)>,
    ) -> Result<(), LoadError> {
        if !self.index.is_empty() {
            return Err(LoadError::AlreadyLoaded);
        }
        if contestants.is_empty() {
            return Err(LoadError::Empty);
        }

        for (name, behavior) in contestants {
            let position = world_setup::random_position(&mut self.rng);
            let id = world_setup::spawn_bot(&mut self.world, &mut self.index, &name, position);
            info!(bot = id.0, %name, x = position.x, y = position.y, "bot loaded");
            self.behaviors.push(behavior);
        }

        self.phase = MatchPhase::Running;
        for slot in 0..self.behaviors.len() {
            if self.phase != MatchPhase::Running {
                break;
            }
            self.invoke(slot, FaultStage::Init);
        }

        self.keep_load_events = true;
        self.clock.restart();
        Ok(())
    }

    /// Advance the match by one tick. Returns whether the match continues.
    ///
    /// Order: sweep last tick's dead missiles, fly missiles, move and run
    /// each living bot in load order, resolve combat, judge termination.
    pub fn tick(&mut self) -> bool {
        if self.phase != MatchPhase::Running {
            return false;
        }

        let dt = self.clock.sample();
        if !std::mem::take(&mut self.keep_load_events) {
            self.events.clear();
        }

        // 1. Sweep missiles that detonated last tick
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 2. Missile flight and detonation
        systems::weapons::run(&mut self.world, &self.index, dt, &mut self.events);
        // 3. Bots: move, then think
        for slot in 0..self.behaviors.len() {
            let Some((id, entity)) = self.index.iter().nth(slot) else {
                continue;
            };
            if !self.is_alive(entity) {
                continue;
            }
            if let Err(err) = movement::step_bot(&mut self.world, entity, dt) {
                debug_assert!(false, "bot {} missing movement components: {err}", id.0);
                error!(bot = id.0, %err, "movement step failed");
            }
            self.invoke(slot, FaultStage::Execute);
            if self.phase == MatchPhase::Aborted {
                break;
            }
        }
        // 4. Combat resolution
        if self.phase == MatchPhase::Running {
            systems::combat::run(&mut self.world, &self.index, &self.config, &mut self.events);
        }

        self.time.advance(dt);
        trace!(tick = self.time.tick, dt, "tick complete");

        // 5. Termination
        self.judge()
    }

    /// Build a snapshot of the current state, including this tick's events.
    pub fn snapshot(&self) -> ArenaSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.index,
            self.time,
            self.phase,
            self.outcome.clone(),
            self.events.clone(),
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ids of all loaded bots, in load order.
    pub fn bot_ids(&self) -> Vec<BotId> {
        self.index.iter().map(|(id, _)| id).collect()
    }

    /// Ids of bots still in play, in load order.
    pub fn living_bots(&self) -> Vec<BotId> {
        systems::combat::living_bots(&self.world, &self.index)
    }

    /// Host-side id-indexed access to the capability API.
    pub fn capabilities(&mut self) -> Capabilities<'_> {
        Capabilities {
            world: &mut self.world,
            index: &self.index,
            rng: &mut self.rng,
            config: &self.config,
            events: &mut self.events,
        }
    }

    /// Move a bot to an exact spot (clamped into the arena), e.g. for
    /// scripted scenarios.
    pub fn place_bot(&mut self, id: BotId, position: Position) -> Result<(), ApiError> {
        let entity = self.index.entity(id)?;
        let mut position = position;
        movement::clamp_to_arena(&mut position);
        let mut current = self
            .world
            .get::<&mut Position>(entity)
            .map_err(|_| ApiError::UnknownBot(id))?;
        *current = position;
        Ok(())
    }

    /// Apply damage from outside the simulation (hazards, scripted tests).
    /// Returns the bot's total damage.
    pub fn inflict_damage(&mut self, id: BotId, amount: u8) -> Result<u8, ApiError> {
        let entity = self.index.entity(id)?;
        systems::combat::apply_damage(&mut self.world, entity, amount, &mut self.events)
            .map_err(|_| ApiError::UnknownBot(id))
    }

    fn is_alive(&self, entity: Entity) -> bool {
        self.world
            .get::<&Hull>(entity)
            .is_ok_and(|hull| hull.status.is_alive())
    }

    /// Run one behavior call and apply the fault policy if it fails.
    fn invoke(&mut self, slot: usize, stage: FaultStage) {
        let Some((id, _)) = self.index.iter().nth(slot) else {
            return;
        };
        let budget = self.config.behavior_budget_ms.map(Duration::from_millis);

        let behavior = &mut self.behaviors[slot];
        let mut api = BotApi::new(
            Capabilities {
                world: &mut self.world,
                index: &self.index,
                rng: &mut self.rng,
                config: &self.config,
                events: &mut self.events,
            },
            id,
        );

        let started = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| match stage {
            FaultStage::Init => behavior.init(&mut api),
            FaultStage::Execute => behavior.execute(&mut api),
        }));
        let elapsed = started.elapsed();

        let reason = match result {
            Ok(Ok(())) => match budget {
                Some(budget) if elapsed > budget => Some(format!(
                    "exceeded its {}ms budget ({}ms)",
                    budget.as_millis(),
                    elapsed.as_millis()
                )),
                _ => None,
            },
            Ok(Err(err)) => Some(format!("{err:#}")),
            Err(payload) => Some(panic_message(payload.as_ref())),
        };

        if let Some(reason) = reason {
            self.fault(id, stage, reason);
        }
    }

    fn fault(&mut self, id: BotId, stage: FaultStage, reason: String) {
        warn!(bot = id.0, ?stage, %reason, policy = ?self.config.fault_policy, "behavior fault");
        self.events.push(ArenaEvent::BehaviorFault {
            bot: id,
            stage,
            reason: reason.clone(),
        });

        match self.config.fault_policy {
            FaultPolicy::Disqualify => {
                if let Ok(entity) = self.index.entity(id) {
                    if let Ok(mut hull) = self.world.get::<&mut Hull>(entity) {
                        hull.status = BotStatus::Forfeited;
                    }
                }
            }
            FaultPolicy::Abort => {
                self.phase = MatchPhase::Aborted;
                self.finish(MatchOutcome::Aborted { bot: id, reason });
            }
        }
    }

    /// Decide whether the match goes on.
    fn judge(&mut self) -> bool {
        if self.phase != MatchPhase::Running {
            return false;
        }

        let living = self.living_bots();
        let outcome = match living.as_slice() {
            [] => Some(MatchOutcome::Draw),
            [winner] => Some(MatchOutcome::Winner { bot: *winner }),
            _ => self
                .config
                .cycle_limit
                .filter(|limit| self.time.tick >= *limit)
                .map(|_| MatchOutcome::Draw),
        };

        match outcome {
            Some(outcome) => {
                self.phase = MatchPhase::Finished;
                self.finish(outcome);
                false
            }
            None => true,
        }
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        info!(tick = self.time.tick, ?outcome, "match over");
        self.events.push(ArenaEvent::MatchOver {
            outcome: outcome.clone(),
        });
        self.outcome = Some(outcome);
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
