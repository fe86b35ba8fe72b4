//! Integration test: headless simulator
//!
//! Plays short seeded runs through the autopilot and checks the report.

use flappy::core::SessionParams;
use flappy::simulator::{run_simulation, simulate_single_run, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_smoke_run_accounts_for_every_round() {
    let config = SimConfig::smoke_test(42);
    let report = run_simulation(&config);

    assert_eq!(report.num_runs, 5);
    assert_eq!(report.run_stats.len(), 5);
    assert_eq!(
        report.runs_timed_out + report.pipe_deaths + report.ground_deaths,
        5
    );
    assert!(report.min_score <= report.max_score);
    for run in &report.run_stats {
        assert!(run.frames <= config.max_frames);
        assert!(run.ticks > 0);
    }
}

#[test]
fn test_same_seed_same_results() {
    let config = SimConfig::smoke_test(7);
    let a = run_simulation(&config);
    let b = run_simulation(&config);

    let scores = |r: &flappy::simulator::SimReport| {
        r.run_stats
            .iter()
            .map(|s| (s.score, s.frames, s.jumps))
            .collect::<Vec<_>>()
    };
    assert_eq!(scores(&a), scores(&b));
}

#[test]
fn test_no_jumps_falls_to_ground() {
    let config = SimConfig {
        // The autopilot never sees the bird below this floor.
        reaction_margin: -10_000.0,
        ..SimConfig::smoke_test(1)
    };
    let stats = simulate_single_run(&config, ChaCha8Rng::seed_from_u64(1));

    assert_eq!(stats.score, 0);
    assert_eq!(stats.cause_label(), "hit the ground");
}

#[test]
fn test_floating_bird_times_out() {
    let config = SimConfig {
        max_frames: 600,
        params: SessionParams {
            gravity: 0.0,
            gap_ratio: 0.6,
            ..Default::default()
        },
        ..SimConfig::smoke_test(3)
    };
    let stats = simulate_single_run(&config, ChaCha8Rng::seed_from_u64(3));

    assert!(stats.cause.is_none());
    assert_eq!(stats.frames, 600);
    assert!(stats.score >= 1);
}

#[test]
fn test_json_report_lists_runs() {
    let report = run_simulation(&SimConfig::smoke_test(9));
    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["num_runs"], 5);
    assert_eq!(json["run_stats"].as_array().unwrap().len(), 5);
}
