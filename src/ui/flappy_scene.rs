//! UI rendering for the play scene.

use crate::core::collaborators::{RenderSink, Snapshot};
use crate::core::entities::Bird;
use crate::ui::game_common::{
    create_game_layout, info_row, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

const PLAY_CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Jump"), ("[q]", "Quit")];

/// Draws every engine frame straight to the terminal.
pub struct TerminalRenderer<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    /// First draw failure, surfaced by the caller after the frame.
    pub error: Option<io::Error>,
}

impl<'a, B: Backend> TerminalRenderer<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self {
            terminal,
            error: None,
        }
    }
}

impl<B: Backend> RenderSink for TerminalRenderer<'_, B> {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        if let Err(e) = self.terminal.draw(|f| {
            let area = f.size();
            render_flappy(f, area, snapshot);
        }) {
            self.error.get_or_insert(e);
        }
    }
}

/// Render the play scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 10, 22);

    let lines = play_area_lines(snapshot, layout.content.width, layout.content.height);
    frame.render_widget(Paragraph::new(lines), layout.content);

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Score: {}", snapshot.score),
        Color::Green,
        PLAY_CONTROLS,
    );
    render_info_panel(frame, layout.info_panel, snapshot);
}

/// Cells covered by the world interval `[start, end]` on an axis of
/// `extent` units drawn across `cells` cells. The interval is in screen
/// orientation: 0 is the left or top edge.
fn cell_range(start: f64, end: f64, extent: f64, cells: u16) -> Option<(u16, u16)> {
    if cells == 0 || end < 0.0 || start > extent {
        return None;
    }
    let scale = cells as f64 / extent;
    let first = (start.max(0.0) * scale).floor() as u16;
    let last = ((end.min(extent) * scale).ceil() as u16).saturating_sub(1);
    let first = first.min(cells - 1);
    Some((first, last.clamp(first, cells - 1)))
}

/// Screen-oriented bounds of the bird: (left, right, top, bottom) in world units.
fn bird_screen_bounds(bird: &Bird, width: f64, height: f64) -> (f64, f64, f64, f64) {
    (
        width - bird.pos_x - bird.width,
        width - bird.pos_x,
        height - bird.pos_y - bird.height,
        height - bird.pos_y,
    )
}

/// Build the play area line by line.
///
/// The world's x axis runs from the far edge on the left to the spawn edge
/// on the right, and y grows upward, so both axes flip on screen.
pub fn play_area_lines(snapshot: &Snapshot<'_>, width: u16, height: u16) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let world_w = snapshot.playfield.width;
    let world_h = snapshot.playfield.height;
    let bird = snapshot.bird;

    let (left, right, top, bottom) = bird_screen_bounds(bird, world_w, world_h);
    let bird_cols = cell_range(left, right, world_w, width);
    // The bottom row is the ground band below y = 0.
    let sky_rows = if height > 1 { height - 1 } else { height };
    let bird_rows = cell_range(top, bottom, world_h, sky_rows);

    let bird_char = if bird.velocity > 0.3 {
        "▲"
    } else if bird.velocity < -1.5 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..sky_rows {
        let world_y = world_h - (row as f64 + 0.5) * world_h / sky_rows as f64;
        let in_bird_row = bird_rows.is_some_and(|(a, b)| row >= a && row <= b);

        let mut spans = Vec::with_capacity(width as usize);
        for col in 0..width {
            if in_bird_row && bird_cols.is_some_and(|(a, b)| col >= a && col <= b) {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let world_x = world_w - (col as f64 + 0.5) * world_w / width as f64;
            let column = snapshot
                .pipes
                .iter()
                .find(|p| world_x >= p.pos_x && world_x <= p.pos_x + p.width);

            let span = match column {
                Some(pipe) if world_y < pipe.height || world_y > pipe.gap_top() => {
                    Span::styled("█", Style::default().fg(Color::Green))
                }
                _ => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    if sky_rows < height {
        lines.push(Line::from(Span::styled(
            "▒".repeat(width as usize),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let best = match snapshot.best_score {
        Some(best) => best.max(snapshot.score).to_string(),
        None => snapshot.score.to_string(),
    };

    let lines = vec![
        Line::from(""),
        info_row("Score", snapshot.score.to_string(), Color::White),
        info_row("Best", best, Color::Yellow),
        Line::from(""),
        info_row("Altitude", format!("{:.0}", snapshot.bird.pos_y), Color::Cyan),
        info_row("Velocity", format!("{:+.2}", snapshot.bird.velocity), Color::Cyan),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
