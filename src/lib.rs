//! Flappy - Terminal Flappy Bird Library
//!
//! The engine under [`core`] is front-end agnostic: it simulates the bird and
//! the pipe pool on a fixed timestep and talks to the outside world only
//! through the collaborator traits. The terminal front end lives in [`ui`]
//! and [`input`]; [`simulator`] plays headless rounds for tuning.

pub mod core;
pub mod input;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use crate::core::{
    FrameOutcome, GameError, Phase, Session, SessionParams, Snapshot, Termination,
};
pub use crate::utils::{HighScoreRecord, JsonHighScoreStore, MemoryHighScoreStore};
