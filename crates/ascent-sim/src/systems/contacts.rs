//! Contact detection and resolution between dynamic bodies and tagged boxes.
//!
//! Only contact *starts* are reported: a pair that stays overlapping across
//! ticks produces one event.

use std::collections::HashSet;

use hecs::{Entity, World};

use ascent_core::constants::CONTACT_SPIN_FACTOR;
use ascent_core::enums::ContactTag;

use crate::components::{BoxCollider, RigidBody, Tagged, Transform};

/// Overlap of two boxes as (x, y) penetration depths, or `None` if apart.
fn penetration(
    a: &Transform,
    a_box: &BoxCollider,
    b: &Transform,
    b_box: &BoxCollider,
) -> Option<(f64, f64)> {
    let dx = (a.position.x - b.position.x).abs();
    let dy = (a.position.y - b.position.y).abs();
    let px = a_box.half_extents.x + b_box.half_extents.x - dx;
    let py = a_box.half_extents.y + b_box.half_extents.y - dy;
    (px > 0.0 && py > 0.0).then_some((px, py))
}

/// Resolve `body`'s contacts against every tagged box.
///
/// Pushes the body out along the shallower axis and kills velocity into the
/// obstacle. `touching` holds the obstacles in contact last tick and is
/// updated in place. Returns newly started contacts in world order.
pub fn run(
    world: &mut World,
    body_entity: Entity,
    touching: &mut HashSet<Entity>,
) -> Vec<(Entity, ContactTag)> {
    let obstacles: Vec<(Entity, Transform, BoxCollider, ContactTag)> = world
        .query::<(&Transform, &BoxCollider, &Tagged)>()
        .iter()
        .map(|(e, (t, b, tag))| (e, *t, *b, tag.0.clone()))
        .collect();

    let Ok((transform, collider, body)) =
        world.query_one_mut::<(&mut Transform, &BoxCollider, &mut RigidBody)>(body_entity)
    else {
        touching.clear();
        return Vec::new();
    };

    let mut started = Vec::new();
    let mut now_touching = HashSet::new();

    for (entity, obstacle, obstacle_box, tag) in obstacles {
        let Some((px, py)) = penetration(transform, collider, &obstacle, &obstacle_box) else {
            continue;
        };
        now_touching.insert(entity);
        let is_new = !touching.contains(&entity);

        if py <= px {
            let sign = (transform.position.y - obstacle.position.y).signum();
            transform.position.y += sign * py;
            if body.velocity.y * sign < 0.0 {
                body.velocity.y = 0.0;
            }
            if is_new {
                // Sliding into a floor or ceiling tips the body.
                body.angular_velocity -= sign * CONTACT_SPIN_FACTOR * body.velocity.x;
            }
        } else {
            let sign = (transform.position.x - obstacle.position.x).signum();
            transform.position.x += sign * px;
            if body.velocity.x * sign < 0.0 {
                body.velocity.x = 0.0;
            }
        }

        if is_new {
            started.push((entity, tag));
        }
    }

    *touching = now_touching;
    started
}
