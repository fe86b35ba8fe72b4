//! A simple scripted player.

use crate::core::entities::{Bird, Pipe};

/// Decide whether to jump this frame.
///
/// Targets the gap of the nearest pipe not yet past the bird, or the middle
/// of the playfield when no pipe is close. Jumps only while falling.
pub fn should_jump(bird: &Bird, pipes: &[Pipe], playfield_height: f64, margin: f64) -> bool {
    if bird.velocity > 0.0 {
        return false;
    }

    let floor = match next_pipe(bird, pipes) {
        Some(pipe) => pipe.height + margin,
        None => playfield_height / 2.0 - bird.height,
    };
    bird.pos_y < floor
}

/// Nearest pipe that has not yet fully cleared the bird.
pub fn next_pipe<'a>(bird: &Bird, pipes: &'a [Pipe]) -> Option<&'a Pipe> {
    pipes
        .iter()
        .filter(|p| p.pos_x < bird.pos_x + bird.width)
        .max_by(|a, b| a.pos_x.total_cmp(&b.pos_x))
}
