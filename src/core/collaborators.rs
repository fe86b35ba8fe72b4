//! Seams between the engine and the outside world.
//!
//! The engine never draws, plays sounds, touches the filesystem or reads
//! input directly; front ends implement these traits.

use super::entities::{Bird, Pipe, Playfield};
use super::error::{PersistenceError, PreloadError};

/// Read-only view of the world handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub bird: &'a Bird,
    pub pipes: &'a [Pipe],
    pub score: u32,
    pub best_score: Option<u32>,
    pub playfield: &'a Playfield,
}

/// Consumes a snapshot every rendered frame. One-way.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

/// Fire-and-forget notifications for audio or other feedback.
pub trait FeedbackSink {
    fn on_jump(&mut self) {}
    fn on_score(&mut self, _score: u32) {}
    fn on_session_end(&mut self, _score: u32) {}
}

/// Stores the best score across sessions.
pub trait HighScoreStore {
    fn load(&self) -> Result<Option<u32>, PersistenceError>;
    fn save(&mut self, score: u32) -> Result<(), PersistenceError>;
}

/// Resources that must be ready before a session may start.
pub trait Preload {
    fn preload(&mut self) -> Result<(), PreloadError>;
}

/// Render sink that discards every frame.
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _snapshot: &Snapshot<'_>) {}
}

/// Feedback sink that ignores every event.
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {}

/// Preload step with nothing to load.
#[derive(Debug, Default)]
pub struct NoPreload;

impl Preload for NoPreload {
    fn preload(&mut self) -> Result<(), PreloadError> {
        Ok(())
    }
}
