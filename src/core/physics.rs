//! One fixed physics tick.

use super::config::SessionParams;
use super::entities::{Bird, Pipe, Playfield};
use super::recycler::recycle_pipe;
use rand::Rng;

/// Difficulty scalar; grows linearly with score.
pub fn time_multiplier(score: u32, params: &SessionParams) -> f64 {
    1.0 + score as f64 * params.time_increasing_factor
}

/// Pipe movement per tick at the given score.
pub fn pipe_speed(score: u32, params: &SessionParams) -> f64 {
    params.pipe_base_rate * time_multiplier(score, params)
}

/// Apply gravity, clamp to terminal velocity, then move the bird.
pub fn update_bird(bird: &mut Bird, params: &SessionParams) {
    bird.velocity -= params.gravity;
    if bird.velocity < params.terminal_velocity {
        bird.velocity = params.terminal_velocity;
    }
    bird.pos_y += bird.velocity;
}

/// Advance the bird and every pipe by exactly one tick.
///
/// Pipe speed is read from `score` once, before any pipe moves. Each pipe
/// is recycled right after its own move. Returns the number of recycles.
pub fn step<R: Rng>(
    bird: &mut Bird,
    pipes: &mut [Pipe],
    score: u32,
    playfield: &Playfield,
    params: &SessionParams,
    rng: &mut R,
) -> usize {
    let speed = pipe_speed(score, params);
    let mut recycled = 0;

    for i in 0..pipes.len() {
        pipes[i].pos_x += speed;
        if recycle_pipe(pipes, i, playfield, params, rng) {
            recycled += 1;
        }
    }

    update_bird(bird, params);
    recycled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bird() -> Bird {
        Bird {
            pos_x: 100.0,
            pos_y: 300.0,
            width: 30.0,
            height: 30.0,
            velocity: 0.0,
        }
    }

    #[test]
    fn test_time_multiplier_doubles_at_score_ten() {
        let params = SessionParams {
            time_increasing_factor: 0.1,
            ..Default::default()
        };
        assert!((time_multiplier(10, &params) - 2.0).abs() < 1e-12);
        assert!((pipe_speed(10, &params) - 2.0 * pipe_speed(0, &params)).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_applied_before_move() {
        let params = SessionParams::default();
        let mut b = bird();
        update_bird(&mut b, &params);
        assert!((b.velocity + params.gravity).abs() < 1e-12);
        assert!((b.pos_y - (300.0 - params.gravity)).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_never_below_terminal() {
        let params = SessionParams {
            gravity: 0.7,
            ..Default::default()
        };
        let mut b = bird();
        b.velocity = 2.0;
        for _ in 0..1000 {
            update_bird(&mut b, &params);
            assert!(b.velocity >= params.terminal_velocity);
        }
        assert_eq!(b.velocity, params.terminal_velocity);
    }

    #[test]
    fn test_step_moves_pipes_by_speed() {
        let playfield = Playfield::default();
        let params = SessionParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut b = bird();
        let mut pipes = vec![
            Pipe {
                pos_x: 0.0,
                width: 50.0,
                height: 150.0,
                gap: 150.0,
                passed: false,
            },
            Pipe {
                pos_x: -200.0,
                width: 50.0,
                height: 150.0,
                gap: 150.0,
                passed: false,
            },
        ];

        let recycled = step(&mut b, &mut pipes, 4, &playfield, &params, &mut rng);

        let speed = pipe_speed(4, &params);
        assert_eq!(recycled, 0);
        assert!((pipes[0].pos_x - speed).abs() < 1e-12);
        assert!((pipes[1].pos_x - (-200.0 + speed)).abs() < 1e-12);
        assert_eq!(b.pos_x, 100.0);
    }

    #[test]
    fn test_step_recycles_pipe_crossing_far_edge() {
        let playfield = Playfield::default();
        let params = SessionParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut b = bird();
        let mut pipes = vec![
            Pipe {
                pos_x: playfield.width,
                width: 50.0,
                height: 150.0,
                gap: 150.0,
                passed: true,
            },
            Pipe {
                pos_x: 100.0,
                width: 50.0,
                height: 150.0,
                gap: 150.0,
                passed: true,
            },
        ];

        let recycled = step(&mut b, &mut pipes, 0, &playfield, &params, &mut rng);

        // The second pipe has not moved yet when the first is recycled.
        assert_eq!(recycled, 1);
        assert!((pipes[0].pos_x - (100.0 - playfield.pipe_spacing(&params))).abs() < 1e-9);
        assert!(!pipes[0].passed);
        assert!(pipes[1].passed);
    }
}
