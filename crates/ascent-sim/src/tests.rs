//! Tests for the headless host: physics, contacts, scene transitions and
//! determinism.

use glam::DVec3;

use ascent_core::config::RocketConfig;
use ascent_core::constants::*;
use ascent_core::enums::*;
use ascent_core::events::RocketEvent;
use ascent_core::input::InputFrame;
use ascent_core::state::RocketSnapshot;
use ascent_core::types::SceneIndex;

use crate::audio::AudioState;
use crate::engine::{SimConfig, SimulationEngine};
use crate::input_script::InputScript;
use crate::levels::{default_levels, levels_from_json_str};

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default()).unwrap()
}

fn debug_engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        rocket: RocketConfig {
            main_thrust: SIM_MAIN_THRUST,
            debug_keys: true,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap()
}

/// Tick idle until the rocket leaves `Alive`, returning that snapshot.
fn tick_until_terminal(engine: &mut SimulationEngine, max_ticks: usize) -> RocketSnapshot {
    for _ in 0..max_ticks {
        let snap = engine.tick(&InputFrame::idle());
        if snap.state != RocketState::Alive {
            return snap;
        }
    }
    panic!("rocket still alive after {max_ticks} ticks");
}

fn tick_idle(engine: &mut SimulationEngine, ticks: usize) -> Vec<RocketSnapshot> {
    (0..ticks).map(|_| engine.tick(&InputFrame::idle())).collect()
}

fn all_events(snaps: &[RocketSnapshot]) -> Vec<RocketEvent> {
    snaps.iter().flat_map(|s| s.events.clone()).collect()
}

// ---- Spawn and physics ----

#[test]
fn test_spawn_rests_on_launch_pad() {
    let mut engine = engine();
    let snaps = tick_idle(&mut engine, 30);
    let last = snaps.last().unwrap();

    assert_eq!(last.state, RocketState::Alive);
    assert!((last.position[1] - 1.5).abs() < 0.05, "y = {}", last.position[1]);
    assert_eq!(last.level_name, "Liftoff");

    let ignored: Vec<_> = all_events(&snaps)
        .into_iter()
        .filter(|e| matches!(e, RocketEvent::ContactIgnored { .. }))
        .collect();
    assert_eq!(
        ignored,
        vec![RocketEvent::ContactIgnored {
            tag: ContactTag::Friendly,
            reason: IgnoreReason::Friendly,
        }],
        "resting contact must be reported once"
    );
}

#[test]
fn test_thrust_lifts_rocket() {
    let mut engine = engine();
    let mut snap = RocketSnapshot::default();
    for i in 0..30 {
        snap = engine.tick(&InputFrame::thrusting());
        if i == 10 {
            assert_eq!(snap.audio.playing, Some(Clip::MainEngine));
            assert!(snap.emitters.engine);
        }
    }
    assert!(snap.position[1] > 5.0, "y = {}", snap.position[1]);
    assert!(snap.velocity[1] > 0.0);
    assert_eq!(snap.state, RocketState::Alive);
}

#[test]
fn test_release_thrust_silences_engine() {
    let mut engine = engine();
    for _ in 0..5 {
        engine.tick(&InputFrame::thrusting());
    }
    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(snap.audio.playing, None);
    assert!(!snap.emitters.engine);
    assert!(snap.events.contains(&RocketEvent::ThrustCut));
}

#[test]
fn test_rotate_left_turns_counter_clockwise() {
    let mut engine = engine();
    let left = InputFrame {
        rotate_left: true,
        ..Default::default()
    };
    let mut snap = RocketSnapshot::default();
    for _ in 0..TICK_RATE {
        snap = engine.tick(&left);
    }
    // One second at the default rcs thrust.
    assert!((snap.heading_deg - DEFAULT_RCS_THRUST).abs() < 1e-6, "{}", snap.heading_deg);

    let right = InputFrame {
        rotate_right: true,
        ..Default::default()
    };
    for _ in 0..TICK_RATE {
        snap = engine.tick(&right);
    }
    assert!(snap.heading_deg.abs() < 1e-6);
}

#[test]
fn test_tilted_thrust_pushes_sideways() {
    let mut engine = engine();
    let left = InputFrame {
        rotate_left: true,
        ..Default::default()
    };
    for _ in 0..9 {
        engine.tick(&left);
    }
    let mut snap = RocketSnapshot::default();
    for _ in 0..10 {
        snap = engine.tick(&InputFrame::thrusting());
    }
    // Nose tilted left: thrust has a -x component.
    assert!(snap.velocity[0] < 0.0);
}

// ---- Terminal contacts ----

#[test]
fn test_crash_reloads_first_level() {
    let mut engine = engine();
    engine.tick(&InputFrame::idle());
    engine.teleport_rocket(DVec3::new(0.0, 3.0, 0.0));

    let snap = tick_until_terminal(&mut engine, 60);
    assert_eq!(snap.state, RocketState::Dead);
    assert_eq!(snap.audio.playing, Some(Clip::Death));
    assert!(snap.emitters.success, "crossed pairing: success particles on crash");
    assert_eq!(snap.pending_loads.len(), 1);
    assert_eq!(snap.pending_loads[0].scene, SceneIndex(FIRST_LEVEL));
    assert!(snap.events.iter().any(|e| matches!(
        e,
        RocketEvent::OutcomeReached {
            outcome: Outcome::Failure,
            ..
        }
    )));

    let snaps = tick_idle(&mut engine, 70);
    let last = snaps.last().unwrap();
    assert_eq!(last.state, RocketState::Alive);
    assert_eq!(last.level, SceneIndex(FIRST_LEVEL));
    assert!((last.position[0] - -10.0).abs() < 1e-9, "respawned on the pad");
    assert!(last.pending_loads.is_empty());
}

#[test]
fn test_finish_pad_loads_next_level() {
    let mut engine = engine();
    engine.tick(&InputFrame::idle());
    engine.teleport_rocket(DVec3::new(12.0, 1.6, 0.0));

    let snap = tick_until_terminal(&mut engine, 30);
    assert_eq!(snap.state, RocketState::Finished);
    assert_eq!(snap.audio.playing, Some(Clip::Success));
    assert!(snap.emitters.death);
    assert_eq!(snap.pending_loads[0].scene, SceneIndex(NEXT_LEVEL));
    assert!((snap.pending_loads[0].remaining_secs - DEFAULT_LEVEL_LOAD_DELAY).abs() <= DT + 1e-9);

    // Nothing happens before the delay has passed.
    let early = tick_idle(&mut engine, 50);
    assert!(early.iter().all(|s| s.level == SceneIndex(FIRST_LEVEL)));

    let snaps = tick_idle(&mut engine, 20);
    let last = snaps.last().unwrap();
    assert_eq!(last.level, SceneIndex(NEXT_LEVEL));
    assert_eq!(last.level_name, "Pillar");
    assert_eq!(last.state, RocketState::Alive);
    assert_eq!(last.emitters, Default::default());
}

#[test]
fn test_thrust_ignored_after_crash() {
    let mut engine = engine();
    engine.tick(&InputFrame::idle());
    engine.teleport_rocket(DVec3::new(0.0, 3.0, 0.0));
    let dead = tick_until_terminal(&mut engine, 60);

    let snap = engine.tick(&InputFrame::thrusting());
    assert_eq!(snap.state, RocketState::Dead);
    assert!(snap.velocity[1] <= 0.0);
    assert_eq!(snap.audio.playing, dead.audio.playing);
}

#[test]
fn test_missing_level_is_ignored() {
    let levels = vec![default_levels()[0].clone()];
    let mut engine = SimulationEngine::with_levels(SimConfig::default(), levels).unwrap();
    engine.tick(&InputFrame::idle());
    engine.teleport_rocket(DVec3::new(12.0, 1.6, 0.0));
    tick_until_terminal(&mut engine, 30);

    let snaps = tick_idle(&mut engine, 80);
    let last = snaps.last().unwrap();
    assert_eq!(last.level, SceneIndex(FIRST_LEVEL));
    assert_eq!(last.state, RocketState::Finished);
}

// ---- Debug keys ----

#[test]
fn test_disabled_collisions_ignore_finish_pad() {
    let mut engine = debug_engine();
    let snap = engine.tick(&InputFrame {
        toggle_collisions: true,
        ..Default::default()
    });
    assert!(snap.collisions_disabled);

    engine.teleport_rocket(DVec3::new(12.0, 1.6, 0.0));
    let snaps = tick_idle(&mut engine, 20);
    assert!(snaps.iter().all(|s| s.state == RocketState::Alive));
    assert!(snaps.iter().all(|s| s.pending_loads.is_empty()));
    assert!(all_events(&snaps).contains(&RocketEvent::ContactIgnored {
        tag: ContactTag::Finish,
        reason: IgnoreReason::CollisionsDisabled,
    }));
}

#[test]
fn test_skip_level_is_immediate() {
    let mut engine = debug_engine();
    let snap = engine.tick(&InputFrame {
        skip_level: true,
        ..Default::default()
    });
    assert_eq!(snap.level, SceneIndex(NEXT_LEVEL));
    assert!(snap
        .events
        .contains(&RocketEvent::DebugSkipLevel { scene: SceneIndex(NEXT_LEVEL) }));
}

#[test]
fn test_skip_after_crash_cancels_pending_load() {
    let mut engine = debug_engine();
    engine.tick(&InputFrame::idle());
    engine.teleport_rocket(DVec3::new(0.0, 3.0, 0.0));
    tick_until_terminal(&mut engine, 60);

    let snap = engine.tick(&InputFrame {
        skip_level: true,
        ..Default::default()
    });
    assert_eq!(snap.level, SceneIndex(NEXT_LEVEL));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, RocketEvent::LevelLoadCancelled { .. })));
    assert!(engine.scheduler().is_empty());

    // The cancelled reload of the first level never fires.
    let snaps = tick_idle(&mut engine, 90);
    assert!(snaps.iter().all(|s| s.level == SceneIndex(NEXT_LEVEL)));
}

// ---- Configuration ----

#[test]
fn test_bad_start_level_rejected() {
    let result = SimulationEngine::new(SimConfig {
        start_level: SceneIndex(7),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_empty_level_list_rejected() {
    assert!(SimulationEngine::with_levels(SimConfig::default(), Vec::new()).is_err());
    assert!(levels_from_json_str("[]").is_err());
}

#[test]
fn test_sim_config_partial_json() {
    let config =
        SimConfig::from_json_str(r#"{ "gravity": 3.7, "rocket": { "debug_keys": true } }"#)
            .unwrap();
    assert_eq!(config.gravity, 3.7);
    assert!(config.rocket.debug_keys);
    assert_eq!(config.rocket_mass, ROCKET_MASS);
    // Omitted rocket fields keep the sim's values, not the controller defaults.
    assert_eq!(config.rocket.main_thrust, SIM_MAIN_THRUST);
    assert_eq!(config.rocket.rcs_thrust, DEFAULT_RCS_THRUST);
}

#[test]
fn test_sim_config_nested_override() {
    let json = r#"{
        "rocket": {
            "main_thrust": 12.0,
            "outcomes": { "failure": { "clip": "Death", "emitter": "Death", "scene": 0 } }
        }
    }"#;
    let config = SimConfig::from_json_str(json).unwrap();
    assert_eq!(config.rocket.main_thrust, 12.0);
    assert_eq!(config.rocket.outcomes.failure.emitter, Emitter::Death);
    assert_eq!(
        config.rocket.outcomes.success,
        SimConfig::default().rocket.outcomes.success
    );
    assert!(SimConfig::from_json_str(r#"{ "rocket": { "main_thrust": -1.0 } }"#).is_err());
}

#[test]
fn test_partial_rocket_config_still_lifts_off() {
    let config = SimConfig::from_json_str(r#"{ "rocket": { "debug_keys": true } }"#).unwrap();
    let mut engine = SimulationEngine::new(config).unwrap();
    let mut snap = RocketSnapshot::default();
    for _ in 0..2 * TICK_RATE {
        snap = engine.tick(&InputFrame::thrusting());
    }
    assert!(snap.position[1] > 5.0, "y = {}", snap.position[1]);
}

#[test]
fn test_levels_from_json() {
    let json = r#"[{
        "name": "Flat",
        "spawn": [0.0, 1.5, 0.0],
        "obstacles": [
            { "center": [0.0, 0.25, 0.0], "half_extents": [2.0, 0.25], "tag": "Friendly" },
            { "center": [8.0, 0.25, 0.0], "half_extents": [2.0, 0.25], "tag": "Finish" },
            { "center": [0.0, -1.0, 0.0], "half_extents": [50.0, 1.0], "tag": "Lava" }
        ]
    }]"#;
    let levels = levels_from_json_str(json).unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].obstacles[2].tag, ContactTag::Other("Lava".into()));

    let mut engine = SimulationEngine::with_levels(SimConfig::default(), levels).unwrap();
    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(snap.level_name, "Flat");
}

// ---- Input scripts ----

#[test]
fn test_script_edge_keys_fire_once_per_step() {
    let script = InputScript::new()
        .hold(
            InputFrame {
                thrust: true,
                toggle_collisions: true,
                ..Default::default()
            },
            3,
        )
        .hold(InputFrame::idle(), 2);
    let frames: Vec<_> = script.frames().collect();
    assert_eq!(frames.len(), 5);
    assert_eq!(script.total_ticks(), 5);
    assert!(frames[0].toggle_collisions);
    assert!(frames[1..].iter().all(|f| !f.toggle_collisions));
    assert!(frames[2].thrust);
    assert!(!frames[3].thrust);
}

#[test]
fn test_script_json_default_ticks() {
    let json = r#"{ "steps": [ { "input": { "thrust": true } }, { "ticks": 4 } ] }"#;
    let script = InputScript::from_json_str(json).unwrap();
    assert_eq!(script.total_ticks(), 5);
}

#[test]
fn test_random_scripts_depend_on_seed() {
    assert_eq!(InputScript::random(5, 300), InputScript::random(5, 300));
    assert_ne!(InputScript::random(5, 300), InputScript::random(6, 300));
    assert_eq!(InputScript::random(9, 123).total_ticks(), 123);
}

#[test]
fn test_run_script_one_snapshot_per_tick() {
    let mut engine = engine();
    let script = InputScript::new()
        .hold(InputFrame::thrusting(), 10)
        .hold(InputFrame::idle(), 5);
    let snaps = engine.run_script(&script);
    assert_eq!(snaps.len(), 15);
    assert_eq!(engine.time().tick, 15);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_script() {
    let script = InputScript::random(12345, 900);
    let mut engine_a = debug_engine();
    let mut engine_b = debug_engine();

    for frame in script.frames() {
        let snap_a = engine_a.tick(&frame);
        let snap_b = engine_b.tick(&frame);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged for the same input");
    }
}

// ---- Audio ----

#[test]
fn test_audio_clip_runs_out() {
    let mut audio = AudioState::default();
    audio.play_one_shot(Clip::MainEngine);
    audio.advance(MAIN_ENGINE_CLIP_SECS / 2.0);
    assert!(audio.is_playing());
    audio.advance(MAIN_ENGINE_CLIP_SECS);
    assert!(!audio.is_playing());
    assert_eq!(audio.view().remaining_secs, 0.0);
}
