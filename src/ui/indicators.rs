//! Full-screen loading and failure indicators.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{COLOR_ACCENT, COLOR_DIM, COLOR_WARN};

/// Vertically centered single-line area within `area`.
fn centered_line(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);
    chunks[1]
}

/// Full-screen "Loading..." shown only when there is no stale content.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "Loading...",
        Style::default().fg(COLOR_ACCENT),
    ));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered_line(area),
    );
}

/// Full-screen failure view with the retry hint.
pub fn render_failed(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let failed = Line::from(Span::styled(
        "Failed.",
        Style::default().fg(COLOR_WARN).add_modifier(Modifier::BOLD),
    ));
    let hint = Line::from(Span::styled(
        "Press 'r' to retry.",
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(Paragraph::new(failed).alignment(Alignment::Center), chunks[1]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[2]);
}
