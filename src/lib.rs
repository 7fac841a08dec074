//! Sky Hopper - deterministic core for a flappy-style obstacle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, run state)
//! - `stepper`: Fixed-timestep clock driven by host frame callbacks
//! - `game`: Host-facing driver (input events in, snapshots/events out)
//! - `config`: Construction-time tuning with fail-fast validation
//! - `highscores`: Leaderboard helpers for the host's storage layer
//!
//! The crate renders nothing, plays no audio, and persists nothing. An
//! external driver feeds it timestamps and input events and reads back
//! serializable snapshots.

pub mod config;
pub mod game;
pub mod highscores;
pub mod sim;
pub mod stepper;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameReport, Game};
pub use highscores::HighScores;
pub use sim::{Bird, GameEvent, GameState, Pipe, RunPhase, Snapshot};
pub use stepper::{FixedStepper, Frame};

/// Display tuning constants
///
/// These only shape the render snapshot (bird tilt); gameplay tuning lives in
/// [`GameConfig`].
pub mod consts {
    /// Nominal simulation rate (60 Hz)
    pub const NOMINAL_TICK_MS: f64 = 1000.0 / 60.0;

    /// Tilt snapped on a flap (degrees, negative = nose up)
    pub const TILT_UP_DEG: f32 = -20.0;
    /// Maximum nose-down tilt while falling (degrees)
    pub const TILT_DOWN_MAX_DEG: f32 = 40.0;
    /// Per-tick tilt relaxation toward nose-down (degrees)
    pub const TILT_STEP_DEG: f32 = 2.0;
}
