//! Snapshot builder: reads the world and host state into a `RocketSnapshot`.

use hecs::{Entity, World};

use ascent_control::host::ScheduledAction;
use ascent_control::scheduler::DeferredScheduler;
use ascent_control::RocketController;
use ascent_core::events::RocketEvent;
use ascent_core::state::{EmitterView, PendingLoadView, RocketSnapshot};
use ascent_core::types::{SceneIndex, SimTime};

use crate::audio::AudioState;
use crate::components::{RigidBody, Transform};

pub struct SnapshotSources<'a> {
    pub world: &'a World,
    pub rocket: Entity,
    pub time: SimTime,
    pub level: SceneIndex,
    pub level_name: &'a str,
    pub controller: &'a RocketController,
    pub audio: &'a AudioState,
    pub emitters: EmitterView,
    pub scheduler: &'a DeferredScheduler,
}

pub fn build_snapshot(src: SnapshotSources<'_>, events: Vec<RocketEvent>) -> RocketSnapshot {
    let mut snapshot = RocketSnapshot {
        time: src.time,
        level: src.level,
        level_name: src.level_name.to_string(),
        state: src.controller.state(),
        collisions_disabled: src.controller.collisions_disabled(),
        audio: src.audio.view(),
        emitters: src.emitters,
        events,
        ..Default::default()
    };

    if let Ok(transform) = src.world.get::<&Transform>(src.rocket) {
        snapshot.position = transform.position.to_array();
        snapshot.heading_deg = transform.heading_deg();
    }
    if let Ok(body) = src.world.get::<&RigidBody>(src.rocket) {
        snapshot.velocity = body.velocity.to_array();
    }

    snapshot.pending_loads = src
        .scheduler
        .pending()
        .map(|(task, action, remaining_secs)| {
            let ScheduledAction::LoadScene(scene) = action;
            PendingLoadView {
                task,
                scene,
                remaining_secs,
            }
        })
        .collect();

    snapshot
}
