//! Plays headless rounds with the autopilot.

use super::autopilot::should_jump;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::collaborators::{NoPreload, NullFeedback, NullRender};
use crate::core::entities::Playfield;
use crate::core::session::{FrameOutcome, Session};
use crate::utils::high_score::MemoryHighScoreStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, {:.1}s, {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.seconds,
                stats.cause_label()
            );
        }
        all_runs.push(stats);

        if config.verbosity == 1 {
            if let Some(line) = progress_line(run_idx + 1, config.num_runs) {
                println!("{}", line);
            }
        }
    }

    SimReport::from_runs(all_runs, config.max_frames)
}

/// Progress message at every tenth of the runs, and after the last one.
pub fn progress_line(done: u32, total: u32) -> Option<String> {
    if total == 0 {
        return None;
    }
    let step = (total / 10).max(1);
    if done % step == 0 || done == total {
        Some(format!("  {}/{} runs ({}%)", done, total, done as u64 * 100 / total as u64))
    } else {
        None
    }
}

/// Play one round to completion or timeout.
pub fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> RunStats {
    let mut session = Session::new(
        config.params.clone(),
        Playfield::default(),
        MemoryHighScoreStore::default(),
        rng,
    );

    let mut now = Duration::ZERO;
    let frame = Duration::from_secs_f64(config.frame_interval);
    let mut stats = RunStats::default();

    if let Err(e) = session.start(now, &mut NoPreload) {
        tracing::error!(error = %e, "Simulation could not start a session");
        return stats;
    }

    for frame_idx in 0..config.max_frames {
        let jump = session.bird().is_some_and(|bird| {
            should_jump(
                bird,
                session.pipes(),
                session.playfield().height,
                config.reaction_margin,
            )
        });
        if jump {
            session.jump(&mut NullFeedback);
            stats.jumps += 1;
        }

        now += frame;
        stats.frames = frame_idx + 1;
        match session.frame(now, &mut NullRender, &mut NullFeedback) {
            FrameOutcome::Ended { cause, .. } => {
                stats.cause = Some(cause);
                break;
            }
            FrameOutcome::Continue { .. } => {}
            FrameOutcome::Inactive => break,
        }
    }

    stats.score = session.score();
    stats.ticks = session.ticks();
    stats.seconds = now.as_secs_f64();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_every_tenth() {
        let lines: Vec<u32> = (1..=100).filter(|d| progress_line(*d, 100).is_some()).collect();
        assert_eq!(lines, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(progress_line(100, 100).as_deref(), Some("  100/100 runs (100%)"));
    }

    #[test]
    fn test_progress_small_run_counts() {
        assert!(progress_line(1, 3).is_some());
        assert!(progress_line(3, 3).is_some());
        assert!(progress_line(0, 0).is_none());
    }

    #[test]
    fn test_seed_near_max_wraps() {
        let config = SimConfig {
            num_runs: 2,
            seed: Some(u64::MAX),
            max_frames: 10,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 2);
    }
}
