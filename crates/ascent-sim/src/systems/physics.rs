//! Rigid body integration.
//!
//! Impulses queued by the controller are applied first, then gravity, then
//! semi-implicit Euler. Physics-driven spin is skipped on ticks where the
//! controller holds the rotation override.

use glam::{DQuat, DVec3};
use hecs::World;

use ascent_core::constants::ANGULAR_DAMPING;

use crate::components::{RigidBody, Transform};

pub fn run(world: &mut World, gravity: f64, dt: f64) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &mut RigidBody)>() {
        if body.mass > 0.0 {
            body.velocity += body.pending_impulse / body.mass;
        }
        body.pending_impulse = DVec3::ZERO;
        body.velocity.y -= gravity * dt;
        transform.position += body.velocity * dt;

        if body.rotation_override {
            body.angular_velocity = 0.0;
        } else if body.angular_velocity != 0.0 {
            let spin = DQuat::from_rotation_z((body.angular_velocity * dt).to_radians());
            transform.rotation = (transform.rotation * spin).normalize();
            body.angular_velocity *= (1.0 - ANGULAR_DAMPING * dt).max(0.0);
        }
        body.rotation_override = false;
    }
}
