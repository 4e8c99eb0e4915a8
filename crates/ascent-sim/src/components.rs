//! ECS components for hecs entities.
//!
//! Components are plain data. Behaviour lives in systems and in the
//! controller.

use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use ascent_core::enums::ContactTag;

/// Marker for the player rocket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rocket;

/// World pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Transform {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Local up axis in world space.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Rotation about +Z in degrees, counter-clockwise, in (-180, 180].
    pub fn heading_deg(&self) -> f64 {
        let up = self.up();
        (-up.x).atan2(up.y).to_degrees()
    }
}

/// Dynamic body state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigidBody {
    pub velocity: DVec3,
    /// Spin about +Z (degrees per second).
    pub angular_velocity: f64,
    pub mass: f64,
    /// World-space impulse accumulated since the last physics step.
    pub pending_impulse: DVec3,
    /// Set by the controller for ticks with manual rotation; cleared by the
    /// physics step.
    pub rotation_override: bool,
}

impl RigidBody {
    pub fn with_mass(mass: f64) -> Self {
        Self {
            velocity: DVec3::ZERO,
            angular_velocity: 0.0,
            mass,
            pending_impulse: DVec3::ZERO,
            rotation_override: false,
        }
    }
}

/// Axis-aligned box in the XY plane, centred on the transform.
/// Rotation is ignored for contact purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoxCollider {
    pub half_extents: DVec2,
}

/// Classification label seen by whatever touches this entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tagged(pub ContactTag);
