//! Level layouts.
//!
//! A level is a spawn point plus tagged boxes. Two levels are built in; a
//! JSON file can replace them.

use std::path::Path;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use ascent_core::enums::ContactTag;
use ascent_core::error::ConfigError;

/// A static tagged box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub center: DVec3,
    pub half_extents: DVec2,
    pub tag: ContactTag,
}

impl ObstacleSpec {
    pub fn new(center: DVec3, half_extents: DVec2, tag: impl Into<ContactTag>) -> Self {
        Self {
            center,
            half_extents,
            tag: tag.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    /// Rocket centre at spawn.
    pub spawn: DVec3,
    pub obstacles: Vec<ObstacleSpec>,
}

/// Ground spans the whole level and is untagged, so touching it is a crash.
fn ground() -> ObstacleSpec {
    ObstacleSpec::new(DVec3::new(0.0, -1.0, 0.0), DVec2::new(60.0, 1.0), "Untagged")
}

fn launch_pad() -> ObstacleSpec {
    ObstacleSpec::new(
        DVec3::new(-10.0, 0.25, 0.0),
        DVec2::new(2.0, 0.25),
        ContactTag::Friendly,
    )
}

/// Spawn resting exactly on the launch pad.
const SPAWN: DVec3 = DVec3::new(-10.0, 1.5, 0.0);

pub fn default_levels() -> Vec<LevelLayout> {
    vec![
        LevelLayout {
            name: "Liftoff".into(),
            spawn: SPAWN,
            obstacles: vec![
                ground(),
                launch_pad(),
                ObstacleSpec::new(
                    DVec3::new(12.0, 0.25, 0.0),
                    DVec2::new(2.0, 0.25),
                    ContactTag::Finish,
                ),
            ],
        },
        LevelLayout {
            name: "Pillar".into(),
            spawn: SPAWN,
            obstacles: vec![
                ground(),
                launch_pad(),
                ObstacleSpec::new(DVec3::new(2.0, 6.0, 0.0), DVec2::new(1.0, 6.0), "Obstacle"),
                ObstacleSpec::new(
                    DVec3::new(15.0, 0.25, 0.0),
                    DVec2::new(2.0, 0.25),
                    ContactTag::Finish,
                ),
            ],
        },
    ]
}

pub fn levels_from_json_str(json: &str) -> Result<Vec<LevelLayout>, ConfigError> {
    let levels: Vec<LevelLayout> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(ConfigError::Invalid("level list is empty".into()));
    }
    Ok(levels)
}

pub fn levels_from_path(path: impl AsRef<Path>) -> Result<Vec<LevelLayout>, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    levels_from_json_str(&json)
}
