//! Pipe recycling: pipes leaving the far edge are moved back behind the
//! pool and re-randomized. The pool never grows or shrinks.

use super::config::SessionParams;
use super::entities::{Pipe, Playfield};
use rand::Rng;
use tracing::debug;

/// Draw a lower-column height uniformly in `[min, max] * height`.
pub fn random_pipe_height<R: Rng>(
    playfield: &Playfield,
    params: &SessionParams,
    rng: &mut R,
) -> f64 {
    let min = params.height_min_ratio * playfield.height;
    let max = params.height_max_ratio * playfield.height;
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Recycle `pipes[index]` if it has scrolled past the far edge.
///
/// The pipe is placed one spacing behind the pipe nearest the spawn edge,
/// so the stagger stays uniform whatever order pipes recycle in. Returns
/// whether the pipe was recycled.
pub fn recycle_pipe<R: Rng>(
    pipes: &mut [Pipe],
    index: usize,
    playfield: &Playfield,
    params: &SessionParams,
    rng: &mut R,
) -> bool {
    if pipes[index].pos_x <= playfield.width {
        return false;
    }

    let new_x = if pipes.len() > 1 {
        let nearest = pipes
            .iter()
            .map(|p| p.pos_x)
            .fold(f64::INFINITY, f64::min);
        nearest - playfield.pipe_spacing(params)
    } else {
        -pipes[index].width
    };

    let height = random_pipe_height(playfield, params, rng);
    let pipe = &mut pipes[index];
    pipe.pos_x = new_x;
    pipe.height = height;
    pipe.gap = playfield.pipe_gap(params);
    pipe.passed = false;

    debug!(index, pos_x = new_x, height, "Recycled pipe");
    true
}
