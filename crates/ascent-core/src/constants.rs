//! Tuning parameters and fixed indices.

/// Simulation tick rate (Hz) used by the headless host.
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Rocket tunables (defaults) ---

/// Rotation rate in degrees per second while a rotate key is held.
pub const DEFAULT_RCS_THRUST: f64 = 100.0;

/// Forward force magnitude, scaled by frame time before it reaches the body.
pub const DEFAULT_MAIN_THRUST: f64 = 5.0;

/// Seconds between a terminal collision and the scene transition.
pub const DEFAULT_LEVEL_LOAD_DELAY: f64 = 2.0;

// --- Scenes ---

/// Scene index of the first level.
pub const FIRST_LEVEL: usize = 0;

/// Scene index of the "next" level. Hardcoded, not relative to the current one.
pub const NEXT_LEVEL: usize = 1;

// --- Scheduler ---

/// Tolerance when comparing the scheduler clock with a task's due time.
pub const SCHEDULER_EPSILON: f64 = 1e-9;

// --- Reference host ---

/// Downward acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Rocket mass (kg).
pub const ROCKET_MASS: f64 = 1.0;

/// Main thrust used by the headless host. The controller default is too weak
/// to lift a unit mass against gravity once scaled by frame time.
pub const SIM_MAIN_THRUST: f64 = 30.0;

/// Rocket collider half-extents (m).
pub const ROCKET_HALF_WIDTH: f64 = 0.5;
pub const ROCKET_HALF_HEIGHT: f64 = 1.0;

/// Angular damping applied to physics-driven spin, per second.
pub const ANGULAR_DAMPING: f64 = 0.5;

/// Spin (deg/s) picked up per m/s of impact speed on a glancing contact.
pub const CONTACT_SPIN_FACTOR: f64 = 4.0;

/// Clip lengths in seconds; the reference audio channel reports
/// `is_playing` until a clip runs out.
pub const MAIN_ENGINE_CLIP_SECS: f64 = 1.0;
pub const SUCCESS_CLIP_SECS: f64 = 1.5;
pub const DEATH_CLIP_SECS: f64 = 1.2;
