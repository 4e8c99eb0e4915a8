#[cfg(test)]
mod tests {
    use crate::config::{OutcomeMapping, RocketConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::RocketEvent;
    use crate::input::InputFrame;
    use crate::state::{EmitterView, RocketSnapshot};
    use crate::types::{SceneIndex, SimTime, TaskId};

    #[test]
    fn test_default_config_matches_original_tunables() {
        let config = RocketConfig::default();
        assert_eq!(config.rcs_thrust, 100.0);
        assert_eq!(config.main_thrust, 5.0);
        assert_eq!(config.level_load_delay, 2.0);
        assert!(!config.debug_keys);
        assert!(config.validate().is_ok());
    }

    /// The default mapping keeps the crossed clip/particle pairing.
    #[test]
    fn test_default_mapping_is_crossed() {
        let mapping = OutcomeMapping::default();
        let success = mapping.feedback(Outcome::Success);
        assert_eq!(success.clip, Clip::Success);
        assert_eq!(success.emitter, Emitter::Death);
        assert_eq!(success.scene, SceneIndex(NEXT_LEVEL));

        let failure = mapping.feedback(Outcome::Failure);
        assert_eq!(failure.clip, Clip::Death);
        assert_eq!(failure.emitter, Emitter::Success);
        assert_eq!(failure.scene, SceneIndex(FIRST_LEVEL));
    }

    #[test]
    fn test_matched_mapping_pairs_by_name() {
        let mapping = OutcomeMapping::matched();
        assert_eq!(mapping.success.emitter, Emitter::Success);
        assert_eq!(mapping.failure.emitter, Emitter::Death);
        assert_eq!(mapping.success.scene, mapping_default_scene(Outcome::Success));
        assert_eq!(mapping.failure.scene, mapping_default_scene(Outcome::Failure));
    }

    fn mapping_default_scene(outcome: Outcome) -> SceneIndex {
        OutcomeMapping::default().feedback(outcome).scene
    }

    #[test]
    fn test_outcome_terminal_states() {
        assert_eq!(Outcome::Success.terminal_state(), RocketState::Finished);
        assert_eq!(Outcome::Failure.terminal_state(), RocketState::Dead);
        assert!(!RocketState::Alive.is_terminal());
        assert!(RocketState::Dead.is_terminal());
        assert!(RocketState::Finished.is_terminal());
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config = RocketConfig::from_json_str(r#"{ "main_thrust": 40.0, "debug_keys": true }"#)
            .unwrap();
        assert_eq!(config.main_thrust, 40.0);
        assert!(config.debug_keys);
        assert_eq!(config.rcs_thrust, DEFAULT_RCS_THRUST);
        assert_eq!(config.outcomes, OutcomeMapping::default());
    }

    #[test]
    fn test_json_config_overrides_one_outcome() {
        let json = r#"{
            "outcomes": {
                "failure": { "clip": "Death", "emitter": "Death", "scene": 0 }
            }
        }"#;
        let config = RocketConfig::from_json_str(json).unwrap();
        assert_eq!(config.outcomes.failure.emitter, Emitter::Death);
        assert_eq!(config.outcomes.success, OutcomeMapping::default().success);
    }

    #[test]
    fn test_validate_rejects_negative_delay() {
        let config = RocketConfig {
            level_load_delay: -1.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidTunable { field, .. }) => {
                assert_eq!(field, "level_load_delay")
            }
            other => panic!("expected InvalidTunable, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_nan_thrust() {
        let config = RocketConfig {
            main_thrust: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = RocketConfig::from_json_str("{ main_thrust: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let err = RocketConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("not/here.json"));
    }

    #[test]
    fn test_contact_tag_parsing() {
        assert_eq!(ContactTag::from("Friendly"), ContactTag::Friendly);
        assert_eq!(ContactTag::from("Finish"), ContactTag::Finish);
        assert_eq!(
            ContactTag::from("Untagged"),
            ContactTag::Other("Untagged".into())
        );
        // Labels are case-sensitive.
        assert_eq!(ContactTag::from("finish"), ContactTag::Other("finish".into()));
    }

    #[test]
    fn test_contact_tag_serializes_as_label() {
        let json = serde_json::to_string(&ContactTag::Finish).unwrap();
        assert_eq!(json, "\"Finish\"");
        let back: ContactTag = serde_json::from_str("\"Obstacle\"").unwrap();
        assert_eq!(back, ContactTag::Other("Obstacle".into()));
    }

    #[test]
    fn test_input_frame_partial_json() {
        let frame: InputFrame = serde_json::from_str(r#"{ "thrust": true }"#).unwrap();
        assert!(frame.thrust);
        assert!(!frame.rotate_left);

        let pressed = InputFrame {
            skip_level: true,
            toggle_collisions: true,
            ..InputFrame::thrusting()
        };
        let held = pressed.held_only();
        assert!(held.thrust);
        assert!(!held.skip_level && !held.toggle_collisions);
    }

    #[test]
    fn test_event_is_internally_tagged() {
        let event = RocketEvent::LevelLoadScheduled {
            task: TaskId(3),
            scene: SceneIndex(1),
            delay_secs: 2.0,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "LevelLoadScheduled");
        assert_eq!(value["scene"], 1);
    }

    #[test]
    fn test_emitter_view_set_and_query() {
        let mut view = EmitterView::default();
        view.set(Emitter::Death, true);
        assert!(view.is_active(Emitter::Death));
        assert!(!view.is_active(Emitter::Engine));
        view.set(Emitter::Death, false);
        assert_eq!(view, EmitterView::default());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let json = serde_json::to_string(&RocketSnapshot::default()).unwrap();
        assert!(json.contains("\"state\":\"Alive\""));
    }
}
