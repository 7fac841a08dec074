//! Run state and core simulation types
//!
//! Everything the renderer or a save needs lives here. The run is a single
//! owned region of mutable state; input handlers and the tick are the only
//! mutation points.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_pipe;
use crate::config::GameConfig;
use crate::consts::{TILT_UP_DEG, TILT_DOWN_MAX_DEG};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for start; nothing moves
    Idle,
    /// Ticking active
    Running,
    /// Terminal collision happened; score frozen until restart
    Ended,
}

/// The player-controlled bird
///
/// `x` and `size` never change after construction; `tilt_deg` is derived from
/// vertical motion each tick and feeds back into nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in px per nominal tick (positive = falling)
    pub velocity: f32,
    /// Display-only tilt in degrees (negative = nose up)
    pub tilt_deg: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.bird_x, config.bird_start_y),
            size: Vec2::new(config.bird_width, config.bird_height),
            velocity: 0.0,
            tilt_deg: 0.0,
        }
    }

    /// Instantaneous upward impulse: velocity is assigned, not added
    pub fn flap(&mut self, jump_impulse: f32) {
        self.velocity = jump_impulse;
        self.tilt_deg = TILT_UP_DEG;
    }

    /// Relax tilt toward nose-down by `step_deg`, only while falling
    pub fn relax_tilt(&mut self, step_deg: f32) {
        if self.velocity > 0.0 {
            self.tilt_deg = (self.tilt_deg + step_deg).min(TILT_DOWN_MAX_DEG);
        }
    }

    /// Leading (right) edge
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A gated pipe obstacle
///
/// The gap spans `[gap_top, world_height - gap_bottom)` vertically;
/// `gap_top + gap_size + gap_bottom == world_height` always holds for spawned
/// pipes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; strictly decreasing while the run is active
    pub x: f32,
    pub width: f32,
    /// Height of the top pipe half
    pub gap_top: f32,
    /// Height of the bottom pipe half
    pub gap_bottom: f32,
    /// Set once the bird has been credited for passing this pipe
    pub scored: bool,
}

impl Pipe {
    /// Trailing (right) edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// True once the trailing edge has left the world
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Events emitted by the simulation for host collaborators (audio, storage,
/// HUD). Fire-and-forget: the core never waits on a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    /// The bird flapped (for sound playback)
    Flapped,
    /// A pipe was cleared; `total` is the score after the increment
    Scored { total: u32 },
    /// Terminal collision; `is_new_best` means `score` exceeded the previous
    /// best and the best was just updated
    RunEnded { score: u32, is_new_best: bool },
}

fn dormant_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; each run derives its own RNG stream from it
    pub seed: u64,
    /// Runs started this session (mixed into the per-run RNG stream)
    pub runs: u32,
    pub phase: RunPhase,
    /// Pipes cleared this run
    pub score: u32,
    /// Best score across runs; monotonically non-decreasing
    pub best: u32,
    /// Ticks advanced this run
    pub time_ticks: u64,
    /// Simulation time since the last pipe spawn
    pub spawn_timer_ms: f32,
    pub bird: Bird,
    /// Ordered by ascending x: spawn order equals position order because all
    /// pipes move at the same speed
    pub pipes: Vec<Pipe>,
    pub config: GameConfig,
    /// Per-run RNG, reseeded on every start
    #[serde(skip, default = "dormant_rng")]
    rng: Pcg32,
    /// Pending events, drained by the host each frame
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a dormant (Idle) state. The config must already be validated.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            runs: 0,
            phase: RunPhase::Idle,
            score: 0,
            best: 0,
            time_ticks: 0,
            spawn_timer_ms: 0.0,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            config,
            rng: dormant_rng(),
            events: Vec::new(),
        }
    }

    /// Reset all per-run state to the Idle baseline
    fn reset_run(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.spawn_timer_ms = 0.0;
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
    }

    /// Begin a fresh run: full reset, new RNG stream, first pipe spawned
    /// synchronously before any tick.
    pub fn start(&mut self) {
        self.reset_run();
        self.runs += 1;
        // Per-run stream: deterministic for a given (seed, run index)
        let stream = self
            .seed
            .wrapping_add(u64::from(self.runs).wrapping_mul(2654435761));
        self.rng = Pcg32::seed_from_u64(stream);
        self.spawn_pipe_now();
        self.phase = RunPhase::Running;
        self.events.push(GameEvent::RunStarted);
        log::info!("run {} started (seed {})", self.runs, self.seed);
    }

    /// Jump request. While Idle this starts a run with the bird at rest (the
    /// impulse is not applied to the first tick); while Running it flaps.
    /// Ignored once Ended.
    pub fn jump(&mut self) {
        match self.phase {
            RunPhase::Idle => self.start(),
            RunPhase::Running => {
                self.bird.flap(self.config.jump_impulse);
                self.events.push(GameEvent::Flapped);
            }
            RunPhase::Ended => {}
        }
    }

    /// Restart request: back to a clean Idle from any phase. Safe to issue at
    /// any point; the next tick sees a fully reset run or none at all.
    pub fn restart(&mut self) {
        self.reset_run();
        self.phase = RunPhase::Idle;
    }

    /// Terminal collision: freeze the run and settle the best score.
    pub(crate) fn end_run(&mut self) {
        let is_new_best = self.score > self.best;
        if is_new_best {
            self.best = self.score;
        }
        self.phase = RunPhase::Ended;
        self.events.push(GameEvent::RunEnded {
            score: self.score,
            is_new_best,
        });
        log::info!(
            "run {} ended: score {} (best {})",
            self.runs,
            self.score,
            self.best
        );
    }

    /// Seed the best score from external persistence. Monotone: a lower value
    /// never overwrites a higher one already achieved this session.
    pub fn set_best_score(&mut self, best: u32) {
        self.best = self.best.max(best);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Append a freshly spawned pipe drawn from the run's RNG stream
    pub(crate) fn spawn_pipe_now(&mut self) {
        let pipe = spawn_pipe(&self.config, &mut self.rng);
        self.pipes.push(pipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_while_idle_starts_at_rest() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.jump();
        assert_eq!(state.phase, RunPhase::Running);
        // The starting jump is a start request only: no impulse applied
        assert_eq!(state.bird.velocity, 0.0);
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn test_jump_while_running_overrides_velocity() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.start();
        state.bird.velocity = 12.3;
        state.jump();
        assert_eq!(state.bird.velocity, state.config.jump_impulse);
        assert_eq!(state.bird.tilt_deg, TILT_UP_DEG);
    }

    #[test]
    fn test_restart_resets_to_clean_idle() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.start();
        state.score = 5;
        state.bird.velocity = 3.0;
        state.end_run();
        state.restart();
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.velocity, 0.0);
        assert!(state.pipes.is_empty());
        // Best survives the restart
        assert_eq!(state.best, 5);
    }

    #[test]
    fn test_best_score_is_monotone() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.set_best_score(10);
        state.set_best_score(4);
        assert_eq!(state.best, 10);

        state.start();
        state.score = 3;
        state.end_run();
        assert_eq!(state.best, 10);
        assert!(matches!(
            state.drain_events().last(),
            Some(GameEvent::RunEnded {
                score: 3,
                is_new_best: false
            })
        ));
    }

    #[test]
    fn test_jump_ignored_once_ended() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.start();
        state.end_run();
        state.jump();
        assert_eq!(state.phase, RunPhase::Ended);
    }

    #[test]
    fn test_start_spawns_distinct_streams_per_run() {
        let mut state = GameState::new(GameConfig::default(), 42);
        state.start();
        let first = state.pipes[0];
        state.restart();
        state.start();
        let second = state.pipes[0];
        // Same session seed, different run index: gap placement differs
        // (equal draws are possible but not for this seed)
        assert_ne!(first.gap_top, second.gap_top);
    }
}
