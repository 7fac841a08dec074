//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{bird_cleared_pipe, bird_hits_pipe, bird_on_ground};
pub use snapshot::{BirdView, PipeView, Snapshot};
pub use spawn::spawn_pipe;
pub use state::{Bird, GameEvent, GameState, Pipe, RunPhase};
pub use tick::tick;
