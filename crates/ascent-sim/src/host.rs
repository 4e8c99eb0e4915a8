//! Collaborator implementation handed to the controller each tick.
//!
//! `HostFrame` borrows the pieces of the engine the controller may touch.
//! Scene loads are recorded and applied by the engine at the end of the tick.

use glam::{DQuat, DVec3};
use hecs::{Entity, World};
use tracing::warn;

use ascent_control::host::{
    AudioChannel, ParticleEmitters, RocketBody, ScheduledAction, SceneLoader, Timer,
};
use ascent_control::scheduler::DeferredScheduler;
use ascent_core::enums::{Clip, Emitter};
use ascent_core::state::EmitterView;
use ascent_core::types::{SceneIndex, TaskId};

use crate::audio::AudioState;
use crate::components::{RigidBody, Transform};

pub struct HostFrame<'a> {
    pub world: &'a mut World,
    pub rocket: Entity,
    pub audio: &'a mut AudioState,
    pub emitters: &'a mut EmitterView,
    pub scheduler: &'a mut DeferredScheduler,
    pub scene_request: &'a mut Option<SceneIndex>,
}

impl RocketBody for HostFrame<'_> {
    fn add_relative_force(&mut self, force: DVec3) {
        match self
            .world
            .query_one_mut::<(&Transform, &mut RigidBody)>(self.rocket)
        {
            Ok((transform, body)) => body.pending_impulse += transform.rotation * force,
            Err(err) => warn!(?err, "rocket body missing, force dropped"),
        }
    }

    fn set_rotation_override(&mut self, manual: bool) {
        if let Ok(body) = self.world.query_one_mut::<&mut RigidBody>(self.rocket) {
            body.rotation_override = manual;
        }
    }

    fn rotate_local(&mut self, axis: DVec3, degrees: f64) {
        if let Ok(transform) = self.world.query_one_mut::<&mut Transform>(self.rocket) {
            let delta = DQuat::from_axis_angle(axis, degrees.to_radians());
            transform.rotation = (transform.rotation * delta).normalize();
        }
    }
}

impl AudioChannel for HostFrame<'_> {
    fn stop(&mut self) {
        self.audio.stop();
    }

    fn play_one_shot(&mut self, clip: Clip) {
        self.audio.play_one_shot(clip);
    }

    fn is_playing(&self) -> bool {
        self.audio.is_playing()
    }
}

impl ParticleEmitters for HostFrame<'_> {
    fn start_emitting(&mut self, emitter: Emitter) {
        self.emitters.set(emitter, true);
    }

    fn stop_emitting(&mut self, emitter: Emitter) {
        self.emitters.set(emitter, false);
    }
}

impl SceneLoader for HostFrame<'_> {
    fn load_scene(&mut self, scene: SceneIndex) {
        *self.scene_request = Some(scene);
    }
}

impl Timer for HostFrame<'_> {
    fn schedule(&mut self, delay_secs: f64, action: ScheduledAction) -> TaskId {
        self.scheduler.schedule(delay_secs, action)
    }

    fn cancel(&mut self, task: TaskId) -> bool {
        self.scheduler.cancel(task)
    }
}
