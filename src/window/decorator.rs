use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Window;
use crate::apps;
use crate::ui::UiFrame;

/// Draws window chrome and a placeholder body into an already-cleared cell
/// rectangle. Hosted app content is opaque to the engine.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(&self, frame: &mut UiFrame<'_>, rect: Rect, window: &Window, focused: bool);
}

#[derive(Debug, Default)]
pub struct DefaultDecorator;

/// Accent for a window's header: the catalog color of its app, or blue for
/// apps outside the catalog.
pub fn accent_color(window: &Window) -> Color {
    apps::find(window.id())
        .and_then(|app| app.color.parse().ok())
        .unwrap_or(Color::Blue)
}

impl WindowDecorator for DefaultDecorator {
    fn render_window(&self, frame: &mut UiFrame<'_>, rect: Rect, window: &Window, focused: bool) {
        let accent = accent_color(window);
        let header_style = if focused {
            Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };
        let border_style = if focused {
            Style::default().fg(accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut flags = Vec::new();
        if window.maximized() {
            flags.push("maximized");
        }
        let title = format!(" [{}] {} ", window.icon(), window.title());
        let g = window.geometry();
        let mut body = vec![
            Line::from(format!("{}x{} at ({}, {})", g.width, g.height, g.x, g.y)),
            Line::from(format!(
                "z {} | workspace {}",
                window.z_index(),
                window.workspace()
            )),
        ];
        if !flags.is_empty() {
            body.push(Line::from(flags.join(", ")));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::styled(title, header_style));
        frame.render_widget(Paragraph::new(body).block(block), rect);
    }
}
