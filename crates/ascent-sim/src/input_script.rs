//! Scripted input for headless runs.
//!
//! A script is a list of steps, each holding one `InputFrame` for a number of
//! ticks. Edge-triggered keys fire on the first tick of their step only.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use ascent_core::error::ConfigError;
use ascent_core::input::InputFrame;

fn one_tick() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub input: InputFrame,
    #[serde(default = "one_tick")]
    pub ticks: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step (builder style).
    pub fn hold(mut self, input: InputFrame, ticks: u32) -> Self {
        self.steps.push(ScriptStep { input, ticks });
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Seeded random play. Same seed, same script.
    pub fn random(seed: u64, total_ticks: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut script = Self::new();
        let mut remaining = total_ticks;
        while remaining > 0 {
            let ticks = rng.gen_range(1..=15).min(remaining);
            let input = InputFrame {
                thrust: rng.gen_bool(0.55),
                rotate_left: rng.gen_bool(0.3),
                rotate_right: rng.gen_bool(0.3),
                skip_level: rng.gen_bool(0.01),
                toggle_collisions: rng.gen_bool(0.02),
            };
            script.steps.push(ScriptStep { input, ticks });
            remaining -= ticks;
        }
        script
    }

    pub fn total_ticks(&self) -> u64 {
        self.steps.iter().map(|s| s.ticks as u64).sum()
    }

    /// Expand into one frame per tick.
    pub fn frames(&self) -> impl Iterator<Item = InputFrame> + '_ {
        self.steps.iter().flat_map(|step| {
            (0..step.ticks).map(move |i| {
                if i == 0 {
                    step.input
                } else {
                    step.input.held_only()
                }
            })
        })
    }
}
