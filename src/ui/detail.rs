//! Post detail screen.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

use super::indicators::{render_failed, render_loading};
use super::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_detail_screen<C>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(Span::styled(
            " Details ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )))
        .title_bottom(
            Line::from(Span::styled(
                " r refresh · esc back ",
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = &app.detail else {
        return;
    };

    if session.state.loading_indicator_visible() {
        render_loading(frame, inner);
        return;
    }
    if session.state.failure_indicator_visible() {
        render_failed(frame, inner);
        return;
    }

    let Some(model) = session.state.view_model(&session.post) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            session.post.title.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  by {}", model.author_name),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    frame.render_widget(
        Paragraph::new(model.body.clone()).wrap(Wrap { trim: false }),
        chunks[1],
    );

    let footer = Line::from(Span::styled(
        format!("{} comment(s)", model.comment_count),
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
