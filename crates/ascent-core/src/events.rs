//! Events emitted by the controller for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{SceneIndex, TaskId};

/// Something observable the controller did this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RocketEvent {
    /// Thrust key went from released to held.
    ThrustEngaged,
    /// Thrust key went from held to released.
    ThrustCut,
    /// A contact produced no transition.
    ContactIgnored { tag: ContactTag, reason: IgnoreReason },
    /// A contact ended the run.
    OutcomeReached {
        outcome: Outcome,
        tag: ContactTag,
        state: RocketState,
    },
    /// A scene load was scheduled.
    LevelLoadScheduled {
        task: TaskId,
        scene: SceneIndex,
        delay_secs: f64,
    },
    /// A pending scene load was cancelled at teardown.
    LevelLoadCancelled { task: TaskId },
    /// Debug key requested the next level immediately.
    DebugSkipLevel { scene: SceneIndex },
    /// Debug key flipped collision handling.
    CollisionsToggled { disabled: bool },
}
