//! Pipe-pass scoring.

use super::entities::{Bird, Pipe};

fn reached_bird(bird: &Bird, pipe: &Pipe) -> bool {
    pipe.pos_x >= bird.pos_x && !pipe.passed
}

/// Number of pipes that would award a point right now. Read-only.
pub fn pending_passes(bird: &Bird, pipes: &[Pipe]) -> u32 {
    pipes.iter().filter(|pipe| reached_bird(bird, pipe)).count() as u32
}

/// Award one point per pipe whose leading edge reached the bird and mark it
/// passed. A pipe scores again only after it has been recycled.
pub fn update_score(bird: &Bird, pipes: &mut [Pipe], score: u32) -> u32 {
    let mut score = score;
    for pipe in pipes.iter_mut() {
        if reached_bird(bird, pipe) {
            score += 1;
            pipe.passed = true;
        }
    }
    score
}
