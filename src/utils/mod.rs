//! Utility modules: build info, persistence, logging.

pub mod build_info;
pub mod high_score;
pub mod logging;
pub mod persistence;

pub use high_score::{HighScoreRecord, JsonHighScoreStore, MemoryHighScoreStore};
