//! Rocket controller configuration.
//!
//! All structs implement `Default` and accept partial JSON, so a config file
//! only needs to name the fields it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Clip, Emitter, Outcome};
use crate::error::ConfigError;
use crate::types::SceneIndex;

/// Presentation and scene choice for one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeFeedback {
    pub clip: Clip,
    pub emitter: Emitter,
    pub scene: SceneIndex,
}

/// Per-outcome feedback supplied by the integrator.
///
/// The default keeps the original game's pairing, where reaching the finish
/// plays the success clip over the death particles and a crash plays the
/// death clip over the success particles. `matched()` pairs them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeMapping {
    pub success: OutcomeFeedback,
    pub failure: OutcomeFeedback,
}

impl Default for OutcomeMapping {
    fn default() -> Self {
        Self {
            success: OutcomeFeedback {
                clip: Clip::Success,
                emitter: Emitter::Death,
                scene: SceneIndex::NEXT,
            },
            failure: OutcomeFeedback {
                clip: Clip::Death,
                emitter: Emitter::Success,
                scene: SceneIndex::FIRST,
            },
        }
    }
}

impl OutcomeMapping {
    /// Success particles with the success clip, death particles with the death clip.
    pub fn matched() -> Self {
        Self {
            success: OutcomeFeedback {
                clip: Clip::Success,
                emitter: Emitter::Success,
                scene: SceneIndex::NEXT,
            },
            failure: OutcomeFeedback {
                clip: Clip::Death,
                emitter: Emitter::Death,
                scene: SceneIndex::FIRST,
            },
        }
    }

    pub fn feedback(&self, outcome: Outcome) -> OutcomeFeedback {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }
}

/// Tunables for one rocket controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    /// Rotation rate (degrees per second).
    pub rcs_thrust: f64,
    /// Forward force magnitude before frame-time scaling.
    pub main_thrust: f64,
    /// Seconds between a terminal contact and the scene load.
    pub level_load_delay: f64,
    /// Process the skip-level and toggle-collisions keys.
    pub debug_keys: bool,
    pub outcomes: OutcomeMapping,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            rcs_thrust: DEFAULT_RCS_THRUST,
            main_thrust: DEFAULT_MAIN_THRUST,
            level_load_delay: DEFAULT_LEVEL_LOAD_DELAY,
            debug_keys: false,
            outcomes: OutcomeMapping::default(),
        }
    }
}

impl RocketConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RocketConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject tunables that would make the control loop meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_tunable("rcs_thrust", self.rcs_thrust)?;
        check_tunable("main_thrust", self.main_thrust)?;
        check_tunable("level_load_delay", self.level_load_delay)?;
        Ok(())
    }
}

fn check_tunable(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTunable { field, value })
    }
}
