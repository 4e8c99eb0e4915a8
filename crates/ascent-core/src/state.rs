//! Host snapshot: the visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::RocketEvent;
use crate::types::{SceneIndex, SimTime, TaskId};

/// Complete state produced by the headless host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RocketSnapshot {
    pub time: SimTime,
    /// Scene currently loaded.
    pub level: SceneIndex,
    pub level_name: String,
    pub state: RocketState,
    pub collisions_disabled: bool,
    /// World position [x, y, z] in meters.
    pub position: [f64; 3],
    /// Rotation about the forward axis (degrees, counter-clockwise).
    pub heading_deg: f64,
    pub velocity: [f64; 3],
    pub audio: AudioView,
    pub emitters: EmitterView,
    pub pending_loads: Vec<PendingLoadView>,
    pub events: Vec<RocketEvent>,
}

/// Audio channel state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioView {
    pub playing: Option<Clip>,
    pub remaining_secs: f64,
}

/// Which emitters are currently active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitterView {
    pub engine: bool,
    pub success: bool,
    pub death: bool,
}

impl EmitterView {
    pub fn is_active(&self, emitter: Emitter) -> bool {
        match emitter {
            Emitter::Engine => self.engine,
            Emitter::Success => self.success,
            Emitter::Death => self.death,
        }
    }

    pub fn set(&mut self, emitter: Emitter, active: bool) {
        match emitter {
            Emitter::Engine => self.engine = active,
            Emitter::Success => self.success = active,
            Emitter::Death => self.death = active,
        }
    }
}

/// A scheduled scene load that has not fired yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingLoadView {
    pub task: TaskId,
    pub scene: SceneIndex,
    pub remaining_secs: f64,
}
