//! Rocket contact state machine and input math.
//!
//! Pure functions over plain data, no host dependency.

use glam::DVec3;

use ascent_core::enums::{ContactTag, IgnoreReason, Outcome, RocketState};
use ascent_core::input::InputFrame;

/// Local axis thrust pushes along.
pub const THRUST_AXIS: DVec3 = DVec3::Y;

/// Local axis the rocket rotates about.
pub const ROLL_AXIS: DVec3 = DVec3::Z;

/// What a contact does to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResolution {
    Ignored(IgnoreReason),
    Transition(Outcome),
}

/// Force for one frame of thrust, in the body's local frame.
pub fn thrust_force(main_thrust: f64, dt: f64) -> DVec3 {
    THRUST_AXIS * main_thrust * dt
}

/// Manual rotation for this frame in degrees. Positive is counter-clockwise
/// (rotate left). Both keys or neither cancel out.
pub fn rotation_delta(input: &InputFrame, rcs_thrust: f64, dt: f64) -> f64 {
    let step = rcs_thrust * dt;
    match (input.rotate_left, input.rotate_right) {
        (true, false) => step,
        (false, true) => -step,
        _ => 0.0,
    }
}

/// Outcome a tag leads to, `None` for friendly objects.
pub fn classify(tag: &ContactTag) -> Option<Outcome> {
    match tag {
        ContactTag::Friendly => None,
        ContactTag::Finish => Some(Outcome::Success),
        ContactTag::Other(_) => Some(Outcome::Failure),
    }
}

/// Evaluate a contact against the current state.
pub fn evaluate_contact(
    state: RocketState,
    collisions_disabled: bool,
    tag: &ContactTag,
) -> ContactResolution {
    if state.is_terminal() {
        return ContactResolution::Ignored(IgnoreReason::NotAlive);
    }
    if collisions_disabled {
        return ContactResolution::Ignored(IgnoreReason::CollisionsDisabled);
    }
    match classify(tag) {
        Some(outcome) => ContactResolution::Transition(outcome),
        None => ContactResolution::Ignored(IgnoreReason::Friendly),
    }
}
