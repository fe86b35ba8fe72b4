//! Simulation configuration.

use crate::core::config::SessionParams;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per round before giving up (60 frames per simulated second)
    pub max_frames: u64,

    /// Frame interval in seconds fed to the session
    pub frame_interval: f64,

    /// How far above the lower column the autopilot lets the bird sink
    /// before it jumps, in playfield units
    pub reaction_margin: f64,

    /// Session parameters used for every round
    pub params: SessionParams,

    /// Output verbosity (0 = silent, 1 = progress every tenth of the runs, 2 = every run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_frames: 60 * 60 * 5,
            frame_interval: 1.0 / 60.0,
            reaction_margin: 10.0,
            params: SessionParams::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick reproducible config for tests.
    pub fn smoke_test(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_frames: 60 * 30,
            verbosity: 0,
            ..Default::default()
        }
    }
}
