//! Parameters screen: edit the session parameter bundle between rounds.

use crate::core::config::SessionParams;
use crate::ui::game_common::{centered_rect, controls_line};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct ParamsScreen {
    pub selected_index: usize,
    /// Edited copy; applied to the session only on save.
    pub draft: SessionParams,
    pub validation_error: Option<String>,
}

impl ParamsScreen {
    pub fn new(current: &SessionParams) -> Self {
        Self {
            selected_index: 0,
            draft: current.clone(),
            validation_error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);
        let fields = self.draft.fields();
        let modal = centered_rect(area, 50, fields.len() as u16 + 8);

        let block = Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(modal);
        f.render_widget(block, modal);

        let mut lines = vec![Line::from("")];
        for (i, (name, value)) in fields.iter().enumerate() {
            let selected = i == self.selected_index;
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{:<24}", marker, name), name_style),
                Span::styled(format!("{:>10.4}", value), Style::default().fg(Color::White)),
            ]));
        }

        lines.push(Line::from(""));
        match &self.validation_error {
            Some(err) => lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from("")),
        }
        lines.push(
            controls_line(&[("[↑↓]", "Move"), ("[←→]", "Adjust"), ("[r]", "Reset")])
                .alignment(Alignment::Center),
        );
        lines.push(
            controls_line(&[("[Enter]", "Save"), ("[Esc]", "Cancel")]).alignment(Alignment::Center),
        );

        f.render_widget(Paragraph::new(lines), inner);
    }
}
