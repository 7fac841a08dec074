//! Game configuration
//!
//! All effect-bearing tuning is fixed at construction. Validation is the only
//! error surface in the crate: a config that could produce degenerate pipe
//! geometry or a stalled clock is rejected up front instead of misbehaving
//! ticks later.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::NOMINAL_TICK_MS;

/// Construction-time configuration error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("world dimensions must be positive (got {width}x{height})")]
    WorldSize { width: f32, height: f32 },

    #[error("gap-top bounds are inverted: min {min} > max {max}")]
    GapBounds { min: f32, max: f32 },

    #[error(
        "gap geometry exceeds world height: max_gap_top {max_gap_top} + gap_size {gap_size} > {world_height}"
    )]
    GapGeometry {
        max_gap_top: f32,
        gap_size: f32,
        world_height: f32,
    },

    #[error("nominal tick duration must be positive (got {0} ms)")]
    TickDuration(f64),

    #[error("max frame delta {max_frame_ms} ms is below the nominal tick {tick_ms} ms")]
    FrameClamp { max_frame_ms: f64, tick_ms: f64 },

    #[error("pipe speed must be positive (got {0})")]
    PipeSpeed(f32),

    #[error("spawn interval must be positive (got {0} ms)")]
    SpawnInterval(f32),
}

/// Complete gameplay configuration, set once at construction
///
/// Units: positions and sizes in world pixels; velocity in px per nominal
/// tick; gravity in px per nominal tick squared; timestamps and intervals
/// in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// World width in px
    pub world_width: f32,
    /// World height in px
    pub world_height: f32,

    /// Bird horizontal position (never changes)
    pub bird_x: f32,
    /// Bird vertical start position
    pub bird_start_y: f32,
    /// Bird width
    pub bird_width: f32,
    /// Bird height
    pub bird_height: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity assigned on a flap (negative = up)
    pub jump_impulse: f32,

    /// Pipe width in px
    pub pipe_width: f32,
    /// Leftward pipe travel per tick
    pub pipe_speed: f32,
    /// Vertical opening between the top and bottom pipe halves
    pub gap_size: f32,
    /// Lowest allowed gap-top height
    pub min_gap_top: f32,
    /// Highest allowed gap-top height (exclusive draw bound)
    pub max_gap_top: f32,
    /// Simulation time between pipe spawns
    pub spawn_interval_ms: f32,

    /// Nominal fixed tick duration
    pub tick_ms: f64,
    /// Per-callback elapsed-time ceiling (spiral-of-death guard)
    pub max_frame_delta_ms: f64,
    /// Optional frame-rate ceiling: callbacks arriving earlier than this are
    /// skipped without losing the elapsed time
    pub min_frame_interval_ms: Option<f64>,
}

impl Default for GameConfig {
    /// Tuning of the reference game: a 400x500 world at 60 Hz
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 500.0,
            bird_x: 50.0,
            bird_start_y: 200.0,
            bird_width: 40.0,
            bird_height: 40.0,
            gravity: 0.4,
            jump_impulse: -6.5,
            pipe_width: 50.0,
            // 100 px/s expressed per nominal 60 Hz tick
            pipe_speed: 100.0 / 60.0,
            gap_size: 120.0,
            min_gap_top: 50.0,
            max_gap_top: 200.0,
            spawn_interval_ms: 1500.0,
            tick_ms: NOMINAL_TICK_MS,
            max_frame_delta_ms: 2.0 * NOMINAL_TICK_MS,
            min_frame_interval_ms: None,
        }
    }
}

impl GameConfig {
    /// Validate the configuration, failing fast on anything that would later
    /// produce undefined pipe geometry or a clock that can never tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::WorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.min_gap_top > self.max_gap_top {
            return Err(ConfigError::GapBounds {
                min: self.min_gap_top,
                max: self.max_gap_top,
            });
        }
        if self.max_gap_top + self.gap_size > self.world_height {
            return Err(ConfigError::GapGeometry {
                max_gap_top: self.max_gap_top,
                gap_size: self.gap_size,
                world_height: self.world_height,
            });
        }
        if self.tick_ms <= 0.0 {
            return Err(ConfigError::TickDuration(self.tick_ms));
        }
        if self.max_frame_delta_ms < self.tick_ms {
            return Err(ConfigError::FrameClamp {
                max_frame_ms: self.max_frame_delta_ms,
                tick_ms: self.tick_ms,
            });
        }
        if self.pipe_speed <= 0.0 {
            return Err(ConfigError::PipeSpeed(self.pipe_speed));
        }
        if self.spawn_interval_ms <= 0.0 {
            return Err(ConfigError::SpawnInterval(self.spawn_interval_ms));
        }
        Ok(())
    }
}
