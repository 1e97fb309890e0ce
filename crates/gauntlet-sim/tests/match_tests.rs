//! End-to-end matches through the public API: registry, loading, host loop
//! and snapshot serialization.

use gauntlet_sim::core::enums::{BotStatus, MatchOutcome, MatchPhase};
use gauntlet_sim::core::types::{BotId, Position};
use gauntlet_sim::{BattleEngine, BehaviorRegistry, BotApi, BotBehavior, MatchHost, SimConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Circles slowly and shoots at whatever crosses its bow.
#[derive(Default)]
struct Spinner {
    heading: i32,
}

impl BotBehavior for Spinner {
    fn init(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        api.set_name("Spinner");
        Ok(())
    }

    fn execute(&mut self, api: &mut BotApi<'_>) -> anyhow::Result<()> {
        self.heading = (self.heading + 5) % 360;
        api.drive(self.heading, 30);
        let range = api.scan(self.heading, 10);
        if range > 0 {
            api.cannon(self.heading, range);
        }
        Ok(())
    }
}

#[derive(Default)]
struct Sitter;

impl BotBehavior for Sitter {
    fn execute(&mut self, _api: &mut BotApi<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

fn registry() -> BehaviorRegistry {
    let mut registry = BehaviorRegistry::new();
    registry
        .register_default::<Spinner>("spinner")
        .register_default::<Sitter>("sitter");
    registry
}

#[test]
fn test_hosted_match_stays_consistent() {
    init_tracing();
    let mut engine = BattleEngine::new(SimConfig::fixed_step(17, 0.05));
    engine
        .load(&registry(), &["spinner", "sitter", "spinner", "sitter"])
        .unwrap();

    let mut host = MatchHost::new(engine);
    host.max_ticks = Some(2000);

    let mut expected_tick = 0;
    let mut last_damage = vec![0u8; 4];
    host.run(|snap| {
        expected_tick += 1;
        assert_eq!(snap.time.tick, expected_tick);
        assert_eq!(snap.bots.len(), 4);
        for (bot, last) in snap.bots.iter().zip(last_damage.iter_mut()) {
            assert!((0.0..1000.0).contains(&bot.position.x));
            assert!((0.0..1000.0).contains(&bot.position.y));
            assert!(bot.damage >= *last, "damage never heals");
            assert!(bot.missiles_in_flight <= 2);
            *last = bot.damage;
        }
    });

    let snap = host.engine().snapshot();
    assert_eq!(snap.bots[0].name, "Spinner");
    assert_eq!(snap.bots[1].name, "sitter");
    assert!(snap.bots.iter().all(|bot| bot.status != BotStatus::Forfeited));
}

#[test]
fn test_scripted_duel_to_the_finish() {
    let mut engine = BattleEngine::new(SimConfig::fixed_step(1, 1.0));
    engine.load(&registry(), &["sitter", "sitter"]).unwrap();
    engine.place_bot(BotId(1), Position::new(500.0, 100.0)).unwrap();
    engine.place_bot(BotId(2), Position::new(500.0, 300.0)).unwrap();

    // Point blank, ten percent a hit.
    let mut volleys = 0;
    while engine.phase() == MatchPhase::Running {
        engine.capabilities().fire_cannon(BotId(1), 0, 200).unwrap();
        engine.tick();
        engine.tick();
        volleys += 1;
        assert!(volleys <= 10);
    }

    assert_eq!(volleys, 10);
    assert_eq!(engine.outcome(), Some(&MatchOutcome::Winner { bot: BotId(1) }));
}

#[test]
fn test_snapshot_serializes_tagged_events() {
    let mut engine = BattleEngine::new(SimConfig::fixed_step(2, 1.0));
    engine.load(&registry(), &["sitter", "sitter"]).unwrap();
    engine.place_bot(BotId(1), Position::new(500.0, 100.0)).unwrap();
    assert!(engine.capabilities().fire_cannon(BotId(1), 0, 300).unwrap());

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["phase"], "Running");
    assert_eq!(json["bots"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["missiles"][0]["owner"], 1);
    assert_eq!(json["events"][0]["type"], "MissileFired");
    assert_eq!(json["events"][0]["range"], 300);
}
