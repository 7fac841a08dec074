//! Host-facing game driver
//!
//! The host owns scheduling: it calls [`Game::on_frame`] once per frame
//! callback with a monotonic timestamp and forwards input events as they
//! arrive. The core never reschedules itself and performs no I/O; collaborator
//! concerns (draw, sounds, best-score storage) hang off the returned report,
//! the drained events, and the snapshot.

use crate::config::{ConfigError, GameConfig};
use crate::sim::{GameEvent, GameState, RunPhase, Snapshot, tick};
use crate::stepper::{FixedStepper, Frame};

/// What the host should do after one frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Fixed ticks actually executed this callback
    pub ticks: u32,
    /// False when the frame-rate ceiling swallowed the callback; skip drawing
    pub drew: bool,
}

/// A complete game session: run state plus its clock
#[derive(Debug)]
pub struct Game {
    state: GameState,
    stepper: FixedStepper,
}

impl Game {
    /// Build a session. Fails fast on an invalid configuration; there are no
    /// other error paths in the crate.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let stepper = FixedStepper::new(&config);
        Ok(Self {
            state: GameState::new(config, seed),
            stepper,
        })
    }

    /// Jump request. Starts a run when Idle (bird at rest on the first tick),
    /// flaps when Running, does nothing when Ended.
    pub fn on_jump_requested(&mut self) {
        let was_idle = self.state.phase == RunPhase::Idle;
        self.state.jump();
        if was_idle {
            // Fresh run: wall-clock time spent idle must not become ticks
            self.stepper.reset();
        }
    }

    /// Start request; a no-op while a run is already active.
    pub fn on_start_requested(&mut self) {
        if self.state.phase != RunPhase::Running {
            self.state.start();
            self.stepper.reset();
        }
    }

    /// Restart request: back to Idle, safe at any point.
    pub fn on_restart_requested(&mut self) {
        self.state.restart();
        self.stepper.reset();
    }

    /// One host frame callback. Converts elapsed wall-clock time into fixed
    /// ticks and runs them; stops early the moment a tick ends the run.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameReport {
        match self.stepper.advance(now_ms) {
            Frame::Skipped => FrameReport {
                ticks: 0,
                drew: false,
            },
            Frame::Accepted { ticks } => {
                let dt_ms = self.stepper.tick_ms() as f32;
                let mut ran = 0;
                for _ in 0..ticks {
                    if self.state.phase != RunPhase::Running {
                        break;
                    }
                    tick(&mut self.state, dt_ms);
                    ran += 1;
                }
                FrameReport {
                    ticks: ran,
                    drew: true,
                }
            }
        }
    }

    /// Read-only snapshot for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Take pending events for audio/persistence collaborators
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Seed the best score from external storage (monotone)
    pub fn set_best_score(&mut self, best: u32) {
        self.state.set_best_score(best);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
