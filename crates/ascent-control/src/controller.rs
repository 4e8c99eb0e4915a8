//! The rocket controller.
//!
//! `RocketController` holds the per-entity state (lifecycle state, debug
//! toggle, pending scene load) and drives the host through the collaborator
//! traits. The host calls `update` once per frame, `on_collision_enter` for
//! each new contact, and `teardown` before unloading the entity.

use tracing::{debug, info};

use ascent_core::config::RocketConfig;
use ascent_core::enums::{Clip, ContactTag, Emitter, Outcome, RocketState};
use ascent_core::error::ConfigError;
use ascent_core::events::RocketEvent;
use ascent_core::input::InputFrame;
use ascent_core::types::{SceneIndex, TaskId};

use crate::fsm::{self, ContactResolution, ROLL_AXIS};
use crate::host::{RocketHost, ScheduledAction};

/// Per-entity controller state.
#[derive(Debug, Clone)]
pub struct RocketController {
    config: RocketConfig,
    state: RocketState,
    collisions_disabled: bool,
    /// Thrust key state last frame, only used to report edges.
    thrusting: bool,
    pending_load: Option<TaskId>,
    events: Vec<RocketEvent>,
}

impl RocketController {
    /// Create a controller. Fails if the config has unusable tunables.
    pub fn new(config: RocketConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: RocketState::Alive,
            collisions_disabled: false,
            thrusting: false,
            pending_load: None,
            events: Vec::new(),
        })
    }

    /// Get the current lifecycle state.
    pub fn state(&self) -> RocketState {
        self.state
    }

    /// Whether the debug toggle has switched contact handling off.
    pub fn collisions_disabled(&self) -> bool {
        self.collisions_disabled
    }

    /// The scene load scheduled by the terminal contact, if any.
    pub fn pending_load(&self) -> Option<TaskId> {
        self.pending_load
    }

    /// Take the events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<RocketEvent> {
        std::mem::take(&mut self.events)
    }

    /// Per-frame update.
    pub fn update<H: RocketHost>(&mut self, host: &mut H, input: &InputFrame, dt: f64) {
        if self.state == RocketState::Alive {
            self.respond_to_thrust(host, input, dt);
            self.respond_to_rotation(host, input, dt);
        }
        if self.config.debug_keys {
            self.respond_to_debug_keys(host, input);
        }
    }

    /// Handle the start of a contact with an object carrying `tag`.
    pub fn on_collision_enter<H: RocketHost>(&mut self, host: &mut H, tag: &ContactTag) {
        match fsm::evaluate_contact(self.state, self.collisions_disabled, tag) {
            ContactResolution::Ignored(reason) => {
                debug!(%tag, ?reason, "contact ignored");
                self.events.push(RocketEvent::ContactIgnored {
                    tag: tag.clone(),
                    reason,
                });
            }
            ContactResolution::Transition(outcome) => self.begin_outcome(host, outcome, tag),
        }
    }

    /// Cancel work that would outlive the entity. Hosts call this before
    /// unloading the scene the rocket lives in.
    pub fn teardown<H: RocketHost>(&mut self, host: &mut H) {
        if let Some(task) = self.pending_load.take() {
            if host.cancel(task) {
                debug!(?task, "pending level load cancelled");
                self.events.push(RocketEvent::LevelLoadCancelled { task });
            }
        }
    }

    fn respond_to_thrust<H: RocketHost>(&mut self, host: &mut H, input: &InputFrame, dt: f64) {
        if input.thrust {
            host.add_relative_force(fsm::thrust_force(self.config.main_thrust, dt));
            if !host.is_playing() {
                host.play_one_shot(Clip::MainEngine);
            }
            host.start_emitting(Emitter::Engine);
            if !self.thrusting {
                self.events.push(RocketEvent::ThrustEngaged);
            }
        } else {
            host.stop();
            host.stop_emitting(Emitter::Engine);
            if self.thrusting {
                self.events.push(RocketEvent::ThrustCut);
            }
        }
        self.thrusting = input.thrust;
    }

    fn respond_to_rotation<H: RocketHost>(&mut self, host: &mut H, input: &InputFrame, dt: f64) {
        let delta = fsm::rotation_delta(input, self.config.rcs_thrust, dt);
        let manual = delta != 0.0;
        host.set_rotation_override(manual);
        if manual {
            host.rotate_local(ROLL_AXIS, delta);
        }
    }

    fn respond_to_debug_keys<H: RocketHost>(&mut self, host: &mut H, input: &InputFrame) {
        if input.skip_level {
            let scene = SceneIndex::NEXT;
            info!(%scene, "debug skip to next level");
            self.events.push(RocketEvent::DebugSkipLevel { scene });
            host.load_scene(scene);
        } else if input.toggle_collisions {
            self.collisions_disabled = !self.collisions_disabled;
            info!(disabled = self.collisions_disabled, "collisions toggled");
            self.events.push(RocketEvent::CollisionsToggled {
                disabled: self.collisions_disabled,
            });
        }
    }

    fn begin_outcome<H: RocketHost>(&mut self, host: &mut H, outcome: Outcome, tag: &ContactTag) {
        let feedback = self.config.outcomes.feedback(outcome);
        let delay_secs = self.config.level_load_delay;

        self.state = outcome.terminal_state();
        self.thrusting = false;
        host.stop();
        let task = host.schedule(delay_secs, ScheduledAction::LoadScene(feedback.scene));
        self.pending_load = Some(task);
        host.play_one_shot(feedback.clip);
        host.start_emitting(feedback.emitter);

        info!(
            ?outcome,
            %tag,
            state = ?self.state,
            scene = %feedback.scene,
            delay_secs,
            "run ended"
        );
        self.events.push(RocketEvent::OutcomeReached {
            outcome,
            tag: tag.clone(),
            state: self.state,
        });
        self.events.push(RocketEvent::LevelLoadScheduled {
            task,
            scene: feedback.scene,
            delay_secs,
        });
    }
}
