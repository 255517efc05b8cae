//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area, plus the painter that turns the window registry into cells.
//!
//! Window geometry lives in viewport pixels and is routinely partly
//! offscreen after a drag. Everything here converts through [`CellScale`]
//! and clips before touching the buffer, so no draw call can land outside
//! the terminal.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::drivers::CellScale;
use crate::keybindings::KeyBindings;
use crate::layout::Viewport;
use crate::window::decorator::WindowDecorator;
use crate::window::{Geometry, WindowManager};

/// Wrapper around `ratatui::Frame` that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Pixel viewport covered by `area` at the given scale.
pub fn viewport_for_area(area: Rect, scale: CellScale) -> Viewport {
    Viewport::new(
        area.width as u32 * scale.px_per_col,
        area.height as u32 * scale.px_per_row,
    )
}

/// Cells covered by `geometry`, clipped to `bounds`. Partially covered cells
/// count as covered. Returns `None` when nothing is on screen.
pub fn cell_rect(geometry: Geometry, scale: CellScale, bounds: Rect) -> Option<Rect> {
    if geometry.width == 0 || geometry.height == 0 {
        return None;
    }
    let left = scale.to_column(geometry.x as i64) + bounds.x as i64;
    let top = scale.to_row(geometry.y as i64) + bounds.y as i64;
    let right = scale.to_column(geometry.right() - 1) + 1 + bounds.x as i64;
    let bottom = scale.to_row(geometry.bottom() - 1) + 1 + bounds.y as i64;

    let clip_left = left.max(bounds.x as i64);
    let clip_top = top.max(bounds.y as i64);
    let clip_right = right.min(bounds.x as i64 + bounds.width as i64);
    let clip_bottom = bottom.min(bounds.y as i64 + bounds.height as i64);
    if clip_right <= clip_left || clip_bottom <= clip_top {
        return None;
    }
    Some(Rect {
        x: clip_left as u16,
        y: clip_top as u16,
        width: (clip_right - clip_left) as u16,
        height: (clip_bottom - clip_top) as u16,
    })
}

/// Split the terminal into the desktop and a one-row status bar.
pub fn split_status(area: Rect) -> (Rect, Rect) {
    if area.height < 2 {
        return (area, Rect { height: 0, ..area });
    }
    let desktop = Rect {
        height: area.height - 1,
        ..area
    };
    let status = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    (desktop, status)
}

/// Paint the visible windows bottom to top, then the status bar.
pub fn render_desktop(
    frame: &mut UiFrame<'_>,
    wm: &WindowManager,
    scale: CellScale,
    decorator: &dyn WindowDecorator,
) {
    let (desktop, status) = split_status(frame.area());
    let order = wm.paint_order();
    let top = order.len().saturating_sub(1);
    for (idx, window) in order.into_iter().enumerate() {
        let Some(rect) = cell_rect(window.geometry(), scale, desktop) else {
            continue;
        };
        frame.render_widget(Clear, rect);
        let is_focused = idx == top;
        decorator.render_window(frame, rect, window, is_focused);
    }
    render_status(frame, status, wm);
}

fn render_status(frame: &mut UiFrame<'_>, area: Rect, wm: &WindowManager) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let visible = wm.visible_windows().count();
    let left = format!(
        " workspace {} | {} of {} windows | z {}",
        wm.current_workspace(),
        visible,
        wm.window_count(),
        wm.highest_z_index()
    );
    let right = "? help  q quit ";
    let buffer = frame.buffer_mut();
    for x in area.x..area.x.saturating_add(area.width) {
        if let Some(cell) = buffer.cell_mut((x, area.y)) {
            cell.set_symbol(" ");
            cell.set_style(style);
        }
    }
    safe_set_string(buffer, area, area.x, area.y, &left, style);
    let width = area.width as usize;
    let right_width = right.chars().count();
    if left.chars().count() + right_width < width {
        let start_x = area.x.saturating_add((width - right_width) as u16);
        safe_set_string(buffer, area, start_x, area.y, right, style);
    }
}

/// Centered overlay listing every key binding.
pub fn render_help(frame: &mut UiFrame<'_>, bindings: &KeyBindings) {
    let lines: Vec<String> = bindings
        .help_entries()
        .into_iter()
        .map(|(action, combos)| format!("{:<14} {}", combos.join(", "), action))
        .collect();
    let body = format!(
        "{}\n\n{}",
        indoc::indoc! {"
            Drag a title bar to move a window, drag an edge or corner to
            resize it, click anywhere on a window to bring it forward."},
        lines.join("\n")
    );
    let area = frame.area();
    let width = area.width.saturating_sub(4).min(72);
    let height = (lines.len() as u16 + 6).min(area.height.saturating_sub(2));
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        ),
        rect,
    );
}
