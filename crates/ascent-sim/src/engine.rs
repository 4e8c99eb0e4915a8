//! Simulation engine: the host loop around one rocket controller.
//!
//! `SimulationEngine` owns the hecs world, the rocket controller and the host
//! services (audio, emitters, scheduler), advances them at a fixed tick rate
//! and produces `RocketSnapshot`s. Completely headless, so runs are
//! deterministic for a given input stream.

use std::collections::HashSet;
use std::path::Path;

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use ascent_control::host::ScheduledAction;
use ascent_control::scheduler::DeferredScheduler;
use ascent_control::RocketController;
use ascent_core::config::RocketConfig;
use ascent_core::constants::{DT, GRAVITY, ROCKET_MASS, SIM_MAIN_THRUST};
use ascent_core::error::ConfigError;
use ascent_core::events::RocketEvent;
use ascent_core::input::InputFrame;
use ascent_core::state::{EmitterView, RocketSnapshot};
use ascent_core::types::{SceneIndex, SimTime};

use crate::audio::AudioState;
use crate::host::HostFrame;
use crate::input_script::InputScript;
use crate::levels::{default_levels, LevelLayout};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub rocket: RocketConfig,
    /// Downward acceleration (m/s²).
    pub gravity: f64,
    pub rocket_mass: f64,
    /// Scene loaded at startup.
    pub start_level: SceneIndex,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rocket: RocketConfig {
                main_thrust: SIM_MAIN_THRUST,
                ..Default::default()
            },
            gravity: GRAVITY,
            rocket_mass: ROCKET_MASS,
            start_level: SceneIndex::FIRST,
        }
    }
}

impl SimConfig {
    /// Parse a partial JSON config. Fields the file omits, including fields
    /// of a nested `rocket` object, keep the values of `SimConfig::default()`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let overlay: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(SimConfig::default())?;
        merge_json(&mut merged, overlay);
        let config: SimConfig = serde_json::from_value(merged)?;
        config.rocket.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Overlay `overlay` onto `base`, recursing into objects present on both sides.
fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// The headless host.
pub struct SimulationEngine {
    world: World,
    levels: Vec<LevelLayout>,
    level: SceneIndex,
    rocket: Entity,
    /// Fresh controller cloned in whenever a scene loads.
    template: RocketController,
    controller: RocketController,
    gravity: f64,
    rocket_mass: f64,
    time: SimTime,
    audio: AudioState,
    emitters: EmitterView,
    scheduler: DeferredScheduler,
    scene_request: Option<SceneIndex>,
    touching: HashSet<Entity>,
    events: Vec<RocketEvent>,
}

impl SimulationEngine {
    /// Create an engine with the built-in levels.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_levels(config, default_levels())
    }

    /// Create an engine with custom levels.
    pub fn with_levels(config: SimConfig, levels: Vec<LevelLayout>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::Invalid("at least one level is required".into()));
        }
        let Some(layout) = levels.get(config.start_level.0) else {
            return Err(ConfigError::Invalid(format!(
                "start level {} out of range ({} levels)",
                config.start_level,
                levels.len()
            )));
        };
        if !(config.gravity.is_finite() && config.rocket_mass > 0.0) {
            return Err(ConfigError::Invalid(
                "gravity must be finite and rocket_mass positive".into(),
            ));
        }

        let template = RocketController::new(config.rocket)?;
        let mut world = World::new();
        let rocket = world_setup::spawn_level(&mut world, layout, config.rocket_mass);
        info!(level = %config.start_level, name = %layout.name, "level loaded");

        Ok(Self {
            world,
            rocket,
            level: config.start_level,
            controller: template.clone(),
            template,
            levels,
            gravity: config.gravity,
            rocket_mass: config.rocket_mass,
            time: SimTime::default(),
            audio: AudioState::default(),
            emitters: EmitterView::default(),
            scheduler: DeferredScheduler::new(),
            scene_request: None,
            touching: HashSet::new(),
            events: Vec::new(),
        })
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputFrame) -> RocketSnapshot {
        let dt = DT;

        // 1. Controller
        {
            let mut host = HostFrame {
                world: &mut self.world,
                rocket: self.rocket,
                audio: &mut self.audio,
                emitters: &mut self.emitters,
                scheduler: &mut self.scheduler,
                scene_request: &mut self.scene_request,
            };
            self.controller.update(&mut host, input, dt);
        }

        // 2. Physics
        systems::physics::run(&mut self.world, self.gravity, dt);

        // 3. Contacts
        let started = systems::contacts::run(&mut self.world, self.rocket, &mut self.touching);
        for (entity, tag) in started {
            debug!(?entity, %tag, tick = self.time.tick, "contact");
            let mut host = HostFrame {
                world: &mut self.world,
                rocket: self.rocket,
                audio: &mut self.audio,
                emitters: &mut self.emitters,
                scheduler: &mut self.scheduler,
                scene_request: &mut self.scene_request,
            };
            self.controller.on_collision_enter(&mut host, &tag);
        }

        // 4. Audio clock and timers
        self.audio.advance(dt);
        for (task, action) in self.scheduler.advance(dt) {
            debug!(?task, ?action, "scheduled action fired");
            match action {
                ScheduledAction::LoadScene(scene) => self.scene_request = Some(scene),
            }
        }

        // 5. Scene transition
        self.events.extend(self.controller.drain_events());
        if let Some(scene) = self.scene_request.take() {
            self.load_scene(scene);
        }

        self.time.advance();
        self.snapshot()
    }

    /// Run every frame of `script` and collect the snapshots.
    pub fn run_script(&mut self, script: &InputScript) -> Vec<RocketSnapshot> {
        script.frames().map(|frame| self.tick(&frame)).collect()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the currently loaded scene.
    pub fn level(&self) -> SceneIndex {
        self.level
    }

    /// Get a read-only reference to the active rocket controller.
    pub fn controller(&self) -> &RocketController {
        &self.controller
    }

    /// Get a read-only reference to the host scheduler.
    pub fn scheduler(&self) -> &DeferredScheduler {
        &self.scheduler
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Move the rocket and zero its motion (for tests needing a specific pose).
    #[cfg(test)]
    pub fn teleport_rocket(&mut self, position: glam::DVec3) {
        use crate::components::{RigidBody, Transform};
        if let Ok((transform, body)) = self
            .world
            .query_one_mut::<(&mut Transform, &mut RigidBody)>(self.rocket)
        {
            transform.position = position;
            body.velocity = glam::DVec3::ZERO;
        }
    }

    /// Tear down the current rocket and spawn `scene` with a fresh controller.
    fn load_scene(&mut self, scene: SceneIndex) {
        let Some(layout) = self.levels.get(scene.0) else {
            warn!(%scene, levels = self.levels.len(), "scene load ignored, no such level");
            return;
        };

        {
            let mut host = HostFrame {
                world: &mut self.world,
                rocket: self.rocket,
                audio: &mut self.audio,
                emitters: &mut self.emitters,
                scheduler: &mut self.scheduler,
                scene_request: &mut self.scene_request,
            };
            self.controller.teardown(&mut host);
        }
        self.events.extend(self.controller.drain_events());

        self.scheduler.clear();
        self.scene_request = None;
        self.touching.clear();
        self.audio.stop();
        self.emitters = EmitterView::default();
        self.rocket = world_setup::spawn_level(&mut self.world, layout, self.rocket_mass);
        self.controller = self.template.clone();
        self.level = scene;
        info!(level = %scene, name = %layout.name, tick = self.time.tick, "level loaded");
    }

    fn snapshot(&mut self) -> RocketSnapshot {
        let events = std::mem::take(&mut self.events);
        let level_name = self
            .levels
            .get(self.level.0)
            .map(|l| l.name.as_str())
            .unwrap_or_default();
        systems::snapshot::build_snapshot(
            systems::snapshot::SnapshotSources {
                world: &self.world,
                rocket: self.rocket,
                time: self.time,
                level: self.level,
                level_name,
                controller: &self.controller,
                audio: &self.audio,
                emitters: self.emitters,
                scheduler: &self.scheduler,
            },
            events,
        )
    }
}
