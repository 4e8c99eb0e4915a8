//! Headless host for ASCENT.
//!
//! Owns a hecs world with the rocket and level geometry, implements the
//! controller's collaborator traits, and runs the fixed-rate tick loop that
//! produces `RocketSnapshot`s.

pub mod audio;
pub mod components;
pub mod engine;
pub mod host;
pub mod input_script;
pub mod levels;
pub mod systems;
pub mod world_setup;

pub use ascent_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
