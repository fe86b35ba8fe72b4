//! Headless simulator for tuning session parameters.
//!
//! Plays many rounds with a scripted autopilot through the real [`Session`]
//! so results reflect actual gameplay.
//!
//! [`Session`]: crate::core::session::Session

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::{next_pipe, should_jump};
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
