//! Per-frame player input.

use serde::{Deserialize, Serialize};

/// Key state sampled by the host once per frame.
///
/// `thrust`, `rotate_left` and `rotate_right` are held states. The debug
/// keys are edge-triggered: true only on the frame the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub skip_level: bool,
    pub toggle_collisions: bool,
}

impl InputFrame {
    /// No keys held or pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn thrusting() -> Self {
        Self {
            thrust: true,
            ..Self::default()
        }
    }

    /// Held keys only; edge-triggered keys cleared.
    pub fn held_only(self) -> Self {
        Self {
            skip_level: false,
            toggle_collisions: false,
            ..self
        }
    }
}
