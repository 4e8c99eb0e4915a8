//! Rocket controller for ASCENT.
//!
//! Implements the per-frame input handling and the Alive → {Dead, Finished}
//! contact state machine on top of host-supplied physics, audio, particle,
//! scene and timer services.

pub mod controller;
pub mod fsm;
pub mod host;
pub mod scheduler;

pub use ascent_core as core;
pub use controller::RocketController;
pub use host::RocketHost;
