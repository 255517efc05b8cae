use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::WmConfig;
use crate::drivers::PointerEvent;
use crate::window::{AppId, Geometry, Size};

/// Edge or corner grabbed by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::Right,
        ResizeEdge::Left,
        ResizeEdge::TopRight,
        ResizeEdge::TopLeft,
        ResizeEdge::BottomRight,
        ResizeEdge::BottomLeft,
    ];

    pub fn from_sides(top: bool, bottom: bool, left: bool, right: bool) -> Option<Self> {
        match (top, bottom, left, right) {
            (true, false, true, false) => Some(ResizeEdge::TopLeft),
            (true, false, false, true) => Some(ResizeEdge::TopRight),
            (false, true, true, false) => Some(ResizeEdge::BottomLeft),
            (false, true, false, true) => Some(ResizeEdge::BottomRight),
            (true, false, false, false) => Some(ResizeEdge::Top),
            (false, true, false, false) => Some(ResizeEdge::Bottom),
            (false, false, true, false) => Some(ResizeEdge::Left),
            (false, false, false, true) => Some(ResizeEdge::Right),
            _ => None,
        }
    }

    pub fn north(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn south(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }

    pub fn east(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn west(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    /// Compass code of the handle, e.g. `"se"` or `"n"`.
    pub fn code(self) -> &'static str {
        match self {
            ResizeEdge::Top => "n",
            ResizeEdge::Bottom => "s",
            ResizeEdge::Right => "e",
            ResizeEdge::Left => "w",
            ResizeEdge::TopRight => "ne",
            ResizeEdge::TopLeft => "nw",
            ResizeEdge::BottomRight => "se",
            ResizeEdge::BottomLeft => "sw",
        }
    }
}

impl fmt::Display for ResizeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandleParseError {
    #[error("resize handle code is empty")]
    Empty,
    #[error("invalid direction {0:?} in resize handle code")]
    InvalidDirection(char),
    #[error("direction {0:?} repeated in resize handle code")]
    Repeated(char),
    #[error("resize handle code {0:?} combines opposite directions")]
    Opposite(String),
}

impl FromStr for ResizeEdge {
    type Err = HandleParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code.is_empty() {
            return Err(HandleParseError::Empty);
        }
        let (mut n, mut s, mut e, mut w) = (false, false, false, false);
        for ch in code.chars() {
            let slot = match ch.to_ascii_lowercase() {
                'n' => &mut n,
                's' => &mut s,
                'e' => &mut e,
                'w' => &mut w,
                _ => return Err(HandleParseError::InvalidDirection(ch)),
            };
            if *slot {
                return Err(HandleParseError::Repeated(ch));
            }
            *slot = true;
        }
        ResizeEdge::from_sides(n, s, w, e).ok_or_else(|| HandleParseError::Opposite(code.into()))
    }
}

/// Active title-bar drag. The offset is the pointer position relative to the
/// window origin when the drag began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDrag {
    pub id: AppId,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Active edge/corner resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDrag {
    pub id: AppId,
    pub edge: ResizeEdge,
    pub start_pointer: PointerEvent,
    pub start: Geometry,
}

/// Region of a window the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Resize(ResizeEdge),
    TitleBar,
    Body,
}

/// New origin for a dragged window; size is untouched.
pub fn apply_move_drag(current: Geometry, drag: &MoveDrag, pointer: PointerEvent) -> Geometry {
    Geometry {
        x: pointer.x.saturating_sub(drag.offset_x),
        y: pointer.y.saturating_sub(drag.offset_y),
        ..current
    }
}

/// Geometry for a resize gesture given the latest pointer position.
///
/// East/south edges clamp at the floor. West/north edges only move the origin
/// while the candidate size is above the floor; once clamped, both origin and
/// size stay at their `current` values so the opposite edge never shifts.
pub fn apply_resize_drag(
    current: Geometry,
    drag: &ResizeDrag,
    pointer: PointerEvent,
    min: Size,
) -> Geometry {
    let dx = pointer.x as i64 - drag.start_pointer.x as i64;
    let dy = pointer.y as i64 - drag.start_pointer.y as i64;
    let start = drag.start;
    let min_w = min.width as i64;
    let min_h = min.height as i64;
    let mut next = current;

    if drag.edge.east() {
        next.width = to_dimension((start.width as i64 + dx).max(min_w));
    }
    if drag.edge.west() {
        let width = (start.width as i64 - dx).max(min_w);
        if width > min_w {
            next.x = to_coord(start.x as i64 + dx);
            next.width = to_dimension(width);
        }
    }
    if drag.edge.south() {
        next.height = to_dimension((start.height as i64 + dy).max(min_h));
    }
    if drag.edge.north() {
        let height = (start.height as i64 - dy).max(min_h);
        if height > min_h {
            next.y = to_coord(start.y as i64 + dy);
            next.height = to_dimension(height);
        }
    }
    next
}

/// Classify a point against a window's chrome. Edge bands win over the title
/// bar so corners stay grabbable.
pub fn hit_zone(geometry: Geometry, x: i32, y: i32, cfg: &WmConfig) -> Option<HitZone> {
    if !geometry.contains(x, y) {
        return None;
    }
    let border = cfg.resize_border as i64;
    let (px, py) = (x as i64, y as i64);
    let left = px < geometry.x as i64 + border;
    let right = px >= geometry.right() - border;
    let top = py < geometry.y as i64 + border;
    let bottom = py >= geometry.bottom() - border;
    // Windows narrower than two bands would match both sides; prefer the
    // trailing edge.
    let (left, right) = if left && right { (false, true) } else { (left, right) };
    let (top, bottom) = if top && bottom { (false, true) } else { (top, bottom) };
    if let Some(edge) = ResizeEdge::from_sides(top, bottom, left, right) {
        return Some(HitZone::Resize(edge));
    }
    if py < geometry.y as i64 + cfg.title_bar_height as i64 {
        Some(HitZone::TitleBar)
    } else {
        Some(HitZone::Body)
    }
}

fn to_dimension(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

fn to_coord(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
