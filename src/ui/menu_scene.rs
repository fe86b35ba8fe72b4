//! Idle menu: title, best score, last round result.

use crate::core::collision::Termination;
use crate::core::session::Phase;
use crate::ui::game_common::{centered_rect, controls_line};
use crate::utils::high_score::HighScoreRecord;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Parameters,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Parameters, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Parameters => "Parameters",
            MenuItem::Quit => "Quit",
        }
    }
}

pub struct MenuScreen {
    pub selected_index: usize,
    /// Set when the last start attempt failed.
    pub error: Option<String>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            error: None,
        }
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index.min(MenuItem::ALL.len() - 1)]
    }

    pub fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        phase: Phase,
        best: Option<&HighScoreRecord>,
        best_score: Option<u32>,
    ) {
        f.render_widget(Clear, area);
        let modal = centered_rect(area, 44, 18);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(modal);
        f.render_widget(block, modal);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "F L A P P Y   B I R D",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let best_text = match (best_score, best.and_then(|r| r.achieved_at())) {
            (Some(score), Some(when)) => {
                format!("Best score: {}  ({})", score, when.format("%Y-%m-%d"))
            }
            (Some(score), None) => format!("Best score: {}", score),
            (None, _) => "No best score yet".to_string(),
        };
        lines.push(Line::from(Span::styled(
            best_text,
            Style::default().fg(Color::White),
        )));

        if let Phase::Ended { score, cause } = phase {
            let how = match cause {
                Termination::Pipe => "hit a pipe",
                Termination::Ground => "fell to the ground",
            };
            let new_best = best_score == Some(score);
            lines.push(Line::from(Span::styled(
                format!("Last round: {} ({})", score, how),
                Style::default().fg(if new_best { Color::Green } else { Color::Red }),
            )));
            if new_best {
                lines.push(Line::from(Span::styled(
                    "NEW BEST!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(""));
            }
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));

        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let style = if i == self.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(format!("  {}  ", item.label()), style)));
        }

        lines.push(Line::from(""));
        if let Some(err) = &self.error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(controls_line(&[
            ("[↑↓]", "Move"),
            ("[Enter]", "Select"),
            ("[q]", "Quit"),
        ]));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
