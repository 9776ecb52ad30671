//! UI rendering.
//!
//! Pure rendering layer: every function here reads the state projections
//! and draws widgets. No transitions happen during a render pass.

mod detail;
mod indicators;
mod posts;

use ratatui::style::Color;
use ratatui::Frame;

use crate::app::{App, Screen};

pub const COLOR_ACCENT: Color = Color::Cyan;
pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_DIM: Color = Color::DarkGray;
pub const COLOR_HEADER: Color = Color::Yellow;
pub const COLOR_WARN: Color = Color::Red;

/// Render the active screen.
pub fn render<C>(frame: &mut Frame, app: &App<C>) {
    match app.screen {
        Screen::Posts => posts::render_posts_screen(frame, app),
        Screen::Detail => detail::render_detail_screen(frame, app),
    }
}
