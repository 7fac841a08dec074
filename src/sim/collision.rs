//! Collision and scoring predicates
//!
//! Plain axis-aligned box tests. There is no swept collision: a single
//! oversized tick can tunnel through a thin pipe, which the stepper's frame
//! clamp makes practically unreachable.

use super::state::{Bird, Pipe};

/// Terminal check against one pipe: horizontal extents overlap and the bird
/// sticks out of the gap on either side.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, world_height: f32) -> bool {
    let overlaps_x = bird.right() > pipe.x && bird.pos.x < pipe.right();
    if !overlaps_x {
        return false;
    }
    bird.pos.y < pipe.gap_top || bird.bottom() > world_height - pipe.gap_bottom
}

/// True once the bird's leading edge has passed the pipe's trailing edge
pub fn bird_cleared_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    bird.right() > pipe.right()
}

/// Terminal ground check
pub fn bird_on_ground(bird: &Bird, world_height: f32) -> bool {
    bird.bottom() >= world_height
}
