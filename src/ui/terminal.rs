//! Terminal setup and the terminal-side collaborators.

use crate::core::collaborators::{FeedbackSink, Preload};
use crate::core::error::PreloadError;
use crate::ui::game_common::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use tracing::debug;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Leave the alternate screen and raw mode.
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Refuses to start a round in a terminal too small to draw it.
#[derive(Debug, Default)]
pub struct TerminalPreload;

impl Preload for TerminalPreload {
    fn preload(&mut self) -> Result<(), PreloadError> {
        let (width, height) =
            crossterm::terminal::size().map_err(|e| PreloadError::Missing(e.to_string()))?;
        check_terminal_size(width, height)
    }
}

pub fn check_terminal_size(width: u16, height: u16) -> Result<(), PreloadError> {
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        return Err(PreloadError::TerminalTooSmall {
            width,
            height,
            min_width: MIN_TERMINAL_WIDTH,
            min_height: MIN_TERMINAL_HEIGHT,
        });
    }
    Ok(())
}

/// Rings the terminal bell on score and crash when enabled.
#[derive(Debug, Default)]
pub struct BellFeedback {
    pub enabled: bool,
}

impl BellFeedback {
    fn ring(&self, times: usize) {
        if !self.enabled {
            return;
        }
        let mut stdout = io::stdout();
        let _ = stdout.write_all("\x07".repeat(times).as_bytes());
        let _ = stdout.flush();
    }
}

impl FeedbackSink for BellFeedback {
    fn on_jump(&mut self) {
        debug!("Jump");
    }

    fn on_score(&mut self, score: u32) {
        debug!(score, "Score feedback");
        self.ring(1);
    }

    fn on_session_end(&mut self, score: u32) {
        debug!(score, "Crash feedback");
        self.ring(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert!(check_terminal_size(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT).is_ok());
        assert!(matches!(
            check_terminal_size(30, 24),
            Err(PreloadError::TerminalTooSmall { width: 30, .. })
        ));
        assert!(check_terminal_size(80, 10).is_err());
    }
}
