//! Fixed timestep simulation tick
//!
//! One tick, in load-bearing order: bird physics, then pipe advancement and
//! spawning, then collision and scoring. Scoring must see post-movement pipe
//! positions.

use super::collision::{bird_cleared_pipe, bird_hits_pipe, bird_on_ground};
use super::state::{GameEvent, GameState, RunPhase};
use crate::consts::TILT_STEP_DEG;

/// Advance the run by one tick of `dt_ms` simulation time.
///
/// `dt_ms` is normally the nominal tick duration; a variable delta behaves
/// identically through the `dt_ms / tick_ms` time scale. No-op unless the run
/// is active.
pub fn tick(state: &mut GameState, dt_ms: f32) {
    if state.phase != RunPhase::Running {
        return;
    }
    state.time_ticks += 1;
    let time_scale = dt_ms / state.config.tick_ms as f32;

    // Bird physics
    state.bird.velocity += state.config.gravity * time_scale;
    state.bird.pos.y += state.bird.velocity * time_scale;
    state.bird.relax_tilt(TILT_STEP_DEG);

    // Pipe advancement and retirement
    let travel = state.config.pipe_speed * time_scale;
    for pipe in &mut state.pipes {
        pipe.x -= travel;
    }
    state.pipes.retain(|pipe| !pipe.is_offscreen());

    // Time-based spawn cadence, counted in simulation time
    state.spawn_timer_ms += dt_ms;
    if state.spawn_timer_ms > state.config.spawn_interval_ms {
        state.spawn_timer_ms = 0.0;
        state.spawn_pipe_now();
    }

    resolve_collisions(state);
}

/// World-bound and pipe checks, then scoring. The run freezes at the moment
/// of collision: a terminal tick credits no score.
fn resolve_collisions(state: &mut GameState) {
    // Soft ceiling: clamp and kill velocity, never terminal
    if state.bird.pos.y < 0.0 {
        state.bird.pos.y = 0.0;
        state.bird.velocity = 0.0;
    }

    let world_height = state.config.world_height;
    if bird_on_ground(&state.bird, world_height) {
        state.end_run();
        return;
    }

    let bird = state.bird;
    if state
        .pipes
        .iter()
        .any(|pipe| bird_hits_pipe(&bird, pipe, world_height))
    {
        state.end_run();
        return;
    }

    let mut cleared = 0u32;
    for pipe in &mut state.pipes {
        if !pipe.scored && bird_cleared_pipe(&bird, pipe) {
            pipe.scored = true;
            cleared += 1;
        }
    }
    for _ in 0..cleared {
        state.score += 1;
        let total = state.score;
        state.push_event(GameEvent::Scored { total });
    }
}
