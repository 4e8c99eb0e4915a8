//! Systems that operate on the world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state.

pub mod contacts;
pub mod physics;
pub mod snapshot;
