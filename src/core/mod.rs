//! Game engine: entities, fixed-step physics, collision, scoring and the
//! session lifecycle. Nothing in here touches the terminal.

pub mod collaborators;
pub mod collision;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game_loop;
pub mod physics;
pub mod recycler;
pub mod scoring;
pub mod session;

pub use collaborators::*;
pub use collision::Termination;
pub use config::SessionParams;
pub use constants::*;
pub use entities::{Bird, Pipe, Playfield};
pub use error::*;
pub use game_loop::FrameClock;
pub use session::{FrameOutcome, Phase, Session};
