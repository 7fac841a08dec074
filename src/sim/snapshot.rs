//! Read-only render snapshot
//!
//! The one-way bridge to the rendering collaborator: everything a frame needs
//! to draw, copied out of the run so the renderer can never mutate simulation
//! state.

use glam::Vec2;
use serde::Serialize;

use super::state::{GameState, RunPhase};

/// Bird as the renderer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BirdView {
    pub pos: Vec2,
    pub size: Vec2,
    pub tilt_deg: f32,
}

/// Pipe as the renderer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Per-frame state snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: RunPhase,
    pub score: u32,
    pub best: u32,
    pub bird: BirdView,
    /// Ordered left to right
    pub pipes: Vec<PipeView>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            best: self.best,
            bird: BirdView {
                pos: self.bird.pos,
                size: self.bird.size,
                tilt_deg: self.bird.tilt_deg,
            },
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: p.width,
                    gap_top: p.gap_top,
                    gap_bottom: p.gap_bottom,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(GameConfig::default(), 5);
        state.start();
        let snap = state.snapshot();
        assert_eq!(snap.phase, RunPhase::Running);
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.bird.pos, state.bird.pos);
        assert_eq!(snap.pipes[0].x, state.config.world_width);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default(), 5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
        assert!(json.contains("\"score\":0"));
    }
}
