//! Error types for the engine and its collaborators.

use std::io;

/// Top-level error returned by session operations.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Preload failed: {0}")]
    Preload(#[from] PreloadError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("A session is already running")]
    AlreadyRunning,
}

/// Rejected session parameters.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Parameter `{field}` is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Parameter `{field}` = {value} is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Playfield must have positive finite dimensions, got {width}x{height}")]
    InvalidPlayfield { width: f64, height: f64 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed parameter file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of the resources a session needs before it can start.
#[derive(thiserror::Error, Debug)]
pub enum PreloadError {
    #[error("Terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("Resource not available: {0}")]
    Missing(String),
}

/// Failure reading or writing persisted data.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("Could not determine the data directory")]
    NoDataDir,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_into_game_error() {
        let err: GameError = ConfigError::NonFinite { field: "gravity" }.into();
        assert!(matches!(err, GameError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Parameter `gravity` is not a finite number"
        );
    }

    #[test]
    fn test_preload_error_message() {
        let err = PreloadError::TerminalTooSmall {
            width: 10,
            height: 5,
            min_width: 40,
            min_height: 20,
        };
        assert_eq!(err.to_string(), "Terminal is 10x5, need at least 40x20");
    }
}
