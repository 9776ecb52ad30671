//! Posts list screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::models::Post;

use super::indicators::{render_failed, render_loading};
use super::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_WARN};

pub fn render_posts_screen<C>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let mut title_spans = vec![Span::styled(
        " Posts ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if app.posts_state.stale_badge_visible() {
        title_spans.push(Span::styled(
            " Stale? ",
            Style::default().fg(COLOR_WARN).add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(title_spans));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.posts_state.loading_indicator_visible() {
        render_loading(frame, inner);
        return;
    }
    if app.posts_state.failure_indicator_visible() {
        render_failed(frame, inner);
        return;
    }

    render_list(frame, inner, app.posts_state.posts(), app.posts_index);
    render_footer_hint(frame, area);
}

fn render_list(frame: &mut Frame, area: Rect, posts: &[Post], selected: usize) {
    if posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No posts.",
                Style::default().fg(COLOR_DIM),
            ))),
            area,
        );
        return;
    }

    // Keep the selection inside the viewport.
    let visible = area.height as usize;
    let first = selected.saturating_sub(visible.saturating_sub(1));

    let lines: Vec<Line> = posts
        .iter()
        .enumerate()
        .skip(first)
        .take(visible.max(1))
        .map(|(i, post)| {
            let is_selected = i == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let row_style = if is_selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(COLOR_HEADER)),
                Span::styled(format!("{:>4}  ", post.id), Style::default().fg(COLOR_DIM)),
                Span::styled(post.title.clone(), row_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer_hint(frame: &mut Frame, area: Rect) {
    let hint = " ↑/↓ select · enter open · r refresh · q quit ";
    if area.height < 2 || (area.width as usize) < hint.len() + 2 {
        return;
    }
    let hint_area = Rect::new(
        area.x + area.width - hint.len() as u16 - 1,
        area.y + area.height - 1,
        hint.len() as u16,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(COLOR_DIM),
        ))),
        hint_area,
    );
}
