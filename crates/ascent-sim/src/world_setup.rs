//! Spawning a level into the world.

use glam::DVec2;
use hecs::{Entity, World};

use ascent_core::constants::{ROCKET_HALF_HEIGHT, ROCKET_HALF_WIDTH};

use crate::components::{BoxCollider, RigidBody, Rocket, Tagged, Transform};
use crate::levels::LevelLayout;

/// Clear the world and spawn `layout`. Returns the rocket entity.
pub fn spawn_level(world: &mut World, layout: &LevelLayout, rocket_mass: f64) -> Entity {
    world.clear();

    for obstacle in &layout.obstacles {
        world.spawn((
            Transform::at(obstacle.center),
            BoxCollider {
                half_extents: obstacle.half_extents,
            },
            Tagged(obstacle.tag.clone()),
        ));
    }

    world.spawn((
        Rocket,
        Transform::at(layout.spawn),
        RigidBody::with_mass(rocket_mass),
        BoxCollider {
            half_extents: DVec2::new(ROCKET_HALF_WIDTH, ROCKET_HALF_HEIGHT),
        },
    ))
}
