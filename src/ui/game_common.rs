//! Shared UI components for the game screens.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Smallest terminal the play scene is drawn in.
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 20;

/// Areas of the play screen.
pub struct GameLayout {
    /// Playfield, inside the outer border.
    pub content: Rect,
    /// Two rows under the playfield: score and key hints.
    pub status_bar: Rect,
    /// Bordered side panel on the right.
    pub info_panel: Rect,
}

/// Split `area` into playfield, status bar and side panel under a titled
/// border.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, info_panel] = split2(
        Layout::horizontal([Constraint::Min(20), Constraint::Length(info_panel_width)]),
        inner,
    );
    let [content, status_bar] = split2(
        Layout::vertical([Constraint::Min(content_min_height), Constraint::Length(2)]),
        left,
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split2(layout: Layout, area: Rect) -> [Rect; 2] {
    let chunks = layout.split(area);
    [chunks[0], chunks[1]]
}

/// Status text on the first row, key hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    let mut lines = vec![Line::from(Span::styled(
        status_text.to_string(),
        Style::default()
            .fg(status_color)
            .add_modifier(Modifier::BOLD),
    ))];
    if !controls.is_empty() {
        lines.push(controls_line(controls));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Key hints as a single styled line.
pub fn controls_line(controls: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Draw the side panel border and return the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A "label: value" row for info panels.
pub fn info_row(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
