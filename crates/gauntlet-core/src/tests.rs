#[cfg(test)]
mod tests {
    use crate::enums::*;
    use crate::events::ArenaEvent;
    use crate::geometry::*;
    use crate::state::{ArenaSnapshot, BotView};
    use crate::types::{BotId, Position, SimTime};

    #[test]
    fn test_bearing_matches_movement_convention() {
        let origin = Position::new(0.0, 0.0);
        assert_eq!(
            bearing_degrees(&origin, &Position::new(500.0, 0.0), BearingConvention::Compass),
            90
        );
        assert_eq!(
            bearing_degrees(&origin, &Position::new(0.0, 500.0), BearingConvention::Compass),
            0
        );
        assert_eq!(
            bearing_degrees(&origin, &Position::new(-10.0, 0.0), BearingConvention::Compass),
            270
        );
        assert_eq!(
            bearing_degrees(&origin, &Position::new(10.0, 10.0), BearingConvention::Compass),
            45
        );

        // Walking along the bearing must reach the target.
        let target = Position::new(300.0, 400.0);
        let b = bearing(&origin, &target);
        let d = origin.range_to(&target);
        let x = b.to_radians().sin() * d;
        let y = b.to_radians().cos() * d;
        assert!((x - target.x).abs() < 1e-9 && (y - target.y).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_bearing_rotates_math_angle() {
        let origin = Position::new(0.0, 0.0);
        // atan2(0, 500) = 0, rotated by 180.
        assert_eq!(
            bearing_degrees(&origin, &Position::new(500.0, 0.0), BearingConvention::Legacy),
            180
        );
        // atan2(500, 0) = 90, rotated by 180.
        assert_eq!(
            bearing_degrees(&origin, &Position::new(0.0, 500.0), BearingConvention::Legacy),
            270
        );
    }

    #[test]
    fn test_swapped_points_are_reciprocal() {
        let pairs = [
            (Position::new(10.0, 20.0), Position::new(700.0, 35.0)),
            (Position::new(999.0, 0.0), Position::new(0.0, 999.0)),
            (Position::new(250.0, 750.0), Position::new(251.0, 100.0)),
        ];
        for convention in [BearingConvention::Compass, BearingConvention::Legacy] {
            for (a, b) in &pairs {
                let forward = bearing_degrees(a, b, convention);
                let back = bearing_degrees(b, a, convention);
                let offset = angular_offset(forward, back);
                assert!(
                    (offset - 180).abs() <= 1,
                    "{convention:?}: {forward} and {back} should be opposite"
                );
            }
        }
    }

    #[test]
    fn test_whole_degrees_wraps_full_turn() {
        assert_eq!(whole_degrees(359.6), 0);
        assert_eq!(whole_degrees(360.0), 0);
        assert_eq!(whole_degrees(-0.2), 0);
        assert_eq!(whole_degrees(-1.0), 359);
        assert_eq!(whole_degrees(89.5), 90);
    }

    #[test]
    fn test_angle_input_policies() {
        assert_eq!(AngleInput::Clamp.apply(-15), 0);
        assert_eq!(AngleInput::Clamp.apply(365), 359);
        assert_eq!(AngleInput::Clamp.apply(120), 120);
        assert_eq!(AngleInput::Wrap.apply(-15), 345);
        assert_eq!(AngleInput::Wrap.apply(365), 5);
        assert_eq!(AngleInput::Wrap.apply(720), 0);
    }

    #[test]
    fn test_angular_offset_is_circular() {
        assert_eq!(angular_offset(355, 5), 10);
        assert_eq!(angular_offset(5, 355), 10);
        assert_eq!(angular_offset(90, 270), 180);
        assert_eq!(angular_offset(42, 42), 0);
    }

    #[test]
    fn test_integer_helpers() {
        assert_eq!(distance(0, 0, 3, 4), 5);
        assert_eq!(distance(0, 0, 999, 999), 1412);
        assert_eq!(isqrt(-16), 4);
        assert_eq!(isqrt(17), 4);
        assert_eq!(reciprocal_degrees(10), 190);
        assert_eq!(reciprocal_degrees(270), 90);
    }

    #[test]
    fn test_degree_trig() {
        assert!((sin_deg(90) - 1.0).abs() < 1e-12);
        assert!((cos_deg(180) + 1.0).abs() < 1e-12);
        assert!((tan_deg(45) - 1.0).abs() < 1e-12);
        assert_eq!(atan_deg(1.0), 45);
        assert_eq!(atan_deg(-1.0), -45);
        assert_eq!(atan_deg(1e9), 90);
        assert_eq!(atan_deg(0.0), 0);
    }

    #[test]
    fn test_sim_time_accumulates() {
        let mut time = SimTime::default();
        time.advance(0.25);
        time.advance(0.5);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_bot_status_alive() {
        assert!(BotStatus::Active.is_alive());
        assert!(!BotStatus::Destroyed.is_alive());
        assert!(!BotStatus::Forfeited.is_alive());
    }

    #[test]
    fn test_snapshot_serializes_tagged_events() {
        let snapshot = ArenaSnapshot {
            phase: MatchPhase::Finished,
            outcome: Some(MatchOutcome::Winner { bot: BotId(2) }),
            bots: vec![BotView {
                id: BotId(2),
                name: "shuttle".into(),
                position: Position::new(1.0, 2.0),
                previous_position: Position::new(1.0, 1.0),
                heading: 90,
                speed: 25,
                damage: 12,
                scan_heading: 180,
                scan_resolution: 4,
                missiles_in_flight: 1,
                status: BotStatus::Active,
            }],
            events: vec![ArenaEvent::BotDestroyed { bot: BotId(1) }],
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"type\":\"BotDestroyed\""));
        assert!(json.contains("\"type\":\"Winner\""));

        let back: ArenaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bot(BotId(2)).map(|b| b.damage), Some(12));
        assert!(back.bot(BotId(1)).is_none());
    }
}
