use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pointer position in viewport pixels (`clientX`/`clientY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Pixel size of one terminal cell, used to translate mouse reports into
/// viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub px_per_col: u32,
    pub px_per_row: u32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            px_per_col: 8,
            px_per_row: 16,
        }
    }
}

impl CellScale {
    /// Pixel at the centre of the cell so edge bands a few pixels wide stay
    /// reachable from either neighbouring cell.
    pub fn to_pointer(&self, column: u16, row: u16) -> PointerEvent {
        let x = column as i64 * self.px_per_col as i64 + self.px_per_col as i64 / 2;
        let y = row as i64 * self.px_per_row as i64 + self.px_per_row as i64 / 2;
        PointerEvent::new(x as i32, y as i32)
    }

    pub fn to_column(&self, x: i64) -> i64 {
        x.div_euclid(self.px_per_col.max(1) as i64)
    }

    pub fn to_row(&self, y: i64) -> i64 {
        y.div_euclid(self.px_per_row.max(1) as i64)
    }
}

/// Translate a left-button mouse report into a pointer phase. Other buttons,
/// scrolls and hover moves are ignored.
pub fn pointer_from_mouse(mouse: &MouseEvent, scale: CellScale) -> Option<(PointerPhase, PointerEvent)> {
    let phase = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerPhase::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
        MouseEventKind::Up(MouseButton::Left) => PointerPhase::Up,
        _ => return None,
    };
    Some((phase, scale.to_pointer(mouse.column, mouse.row)))
}
