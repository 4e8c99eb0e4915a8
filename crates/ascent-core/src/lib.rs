//! Core types and definitions for ASCENT.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, input frames, configuration, events, snapshots, and constants.
//! It has no dependency on the controller or any host runtime.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
