//! Pipe spawning
//!
//! Cadence is time-based: the tick accumulates simulation time and spawns a
//! pipe whenever `spawn_interval_ms` has elapsed, independent of pipe count
//! and frame rate. Placement is the only randomness in the game, drawn from
//! the run's seeded RNG.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Pipe;
use crate::config::GameConfig;

/// Create a pipe at the right edge of the world with a uniformly random gap
/// placement in `[min_gap_top, max_gap_top)`.
///
/// Geometry invariant (guaranteed by config validation):
/// `gap_top + gap_size + gap_bottom == world_height` with `gap_bottom >= 0`.
pub fn spawn_pipe(config: &GameConfig, rng: &mut Pcg32) -> Pipe {
    let gap_top = if config.min_gap_top < config.max_gap_top {
        rng.random_range(config.min_gap_top..config.max_gap_top)
    } else {
        config.min_gap_top
    };
    Pipe {
        x: config.world_width,
        width: config.pipe_width,
        gap_top,
        gap_bottom: config.world_height - gap_top - config.gap_size,
        scored: false,
    }
}
