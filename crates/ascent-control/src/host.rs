//! Collaborator traits the host implements for the controller.
//!
//! The controller never owns these services. A host hands itself in on every
//! call, so borrows last for one frame at most.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use ascent_core::enums::{Clip, Emitter};
use ascent_core::types::{SceneIndex, TaskId};

/// Physics body and transform of the rocket entity.
pub trait RocketBody {
    /// Apply a force expressed in the body's local frame.
    fn add_relative_force(&mut self, force: DVec3);
    /// Take manual control of rotation for this tick. While set, the physics
    /// step must not integrate its own angular response.
    fn set_rotation_override(&mut self, manual: bool);
    /// Rotate the entity about a local axis.
    fn rotate_local(&mut self, axis: DVec3, degrees: f64);
}

/// The rocket's single audio output.
pub trait AudioChannel {
    fn stop(&mut self);
    fn play_one_shot(&mut self, clip: Clip);
    fn is_playing(&self) -> bool;
}

/// The rocket's particle emitters. Starting a running emitter is a no-op.
pub trait ParticleEmitters {
    fn start_emitting(&mut self, emitter: Emitter);
    fn stop_emitting(&mut self, emitter: Emitter);
}

pub trait SceneLoader {
    fn load_scene(&mut self, scene: SceneIndex);
}

/// Action executed by the host when a scheduled task comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    LoadScene(SceneIndex),
}

/// Deferred execution with cancellation.
pub trait Timer {
    fn schedule(&mut self, delay_secs: f64, action: ScheduledAction) -> TaskId;
    /// Returns false if the task already fired or was never scheduled.
    fn cancel(&mut self, task: TaskId) -> bool;
}

/// Everything a rocket controller needs from its host.
pub trait RocketHost: RocketBody + AudioChannel + ParticleEmitters + SceneLoader + Timer {}

impl<T> RocketHost for T where
    T: RocketBody + AudioChannel + ParticleEmitters + SceneLoader + Timer
{
}
