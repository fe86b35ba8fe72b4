//! Termination checks. Everything here is pure.

use super::config::SessionParams;
use super::entities::{Bird, Pipe, Playfield};
use serde::Serialize;

/// Whether the bird and pipe overlap horizontally.
pub fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    pipe.pos_x < bird.pos_x + bird.width && pipe.pos_x + pipe.width > bird.pos_x
}

/// Whether the bird touches either column of `pipe`.
pub fn collides_with(bird: &Bird, pipe: &Pipe) -> bool {
    overlaps_horizontally(bird, pipe)
        && (bird.pos_y <= pipe.height || bird.top() >= pipe.gap_top())
}

/// Whether the bird touches any pipe in the pool.
pub fn does_bird_collide(bird: &Bird, pipes: &[Pipe]) -> bool {
    pipes.iter().any(|pipe| collides_with(bird, pipe))
}

/// Whether the bird sank further below the ground than the tolerance allows.
pub fn below_ground(bird: &Bird, playfield: &Playfield, params: &SessionParams) -> bool {
    bird.pos_y < -params.ground_tolerance * playfield.height
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Pipe,
    Ground,
}

/// Combined terminal check, pipe collisions first.
pub fn termination(
    bird: &Bird,
    pipes: &[Pipe],
    playfield: &Playfield,
    params: &SessionParams,
) -> Option<Termination> {
    if does_bird_collide(bird, pipes) {
        Some(Termination::Pipe)
    } else if below_ground(bird, playfield, params) {
        Some(Termination::Ground)
    } else {
        None
    }
}

pub fn should_terminate(
    bird: &Bird,
    pipes: &[Pipe],
    playfield: &Playfield,
    params: &SessionParams,
) -> bool {
    termination(bird, pipes, playfield, params).is_some()
}
