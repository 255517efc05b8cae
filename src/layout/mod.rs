pub mod floating;

use crate::config::WmConfig;
use crate::window::{Geometry, Size};

/// Live dimensions of the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn classify(&self, breakpoint: u32) -> ViewportClass {
        if self.width <= breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

/// Full-screen rectangle used on mobile, both for new windows and for
/// maximize. Sizes never drop below the configured floor.
pub fn mobile_canvas(viewport: Viewport, cfg: &WmConfig) -> Geometry {
    Geometry::new(
        0,
        0,
        viewport.width.max(cfg.min_width),
        viewport
            .height
            .saturating_sub(cfg.mobile_chrome_height)
            .max(cfg.min_height),
    )
}

/// Rectangle a window occupies while maximized.
///
/// Desktop leaves the dock margin on the left and the edge margin on the
/// other three sides.
pub fn maximized_geometry(viewport: Viewport, cfg: &WmConfig) -> Geometry {
    match viewport.classify(cfg.mobile_breakpoint) {
        ViewportClass::Mobile => mobile_canvas(viewport, cfg),
        ViewportClass::Desktop => {
            let width = viewport.width as i64 - cfg.dock_margin as i64 - cfg.edge_margin as i64;
            let height = viewport.height as i64 - 2 * cfg.edge_margin as i64;
            Geometry::new(
                cfg.dock_margin,
                cfg.edge_margin,
                clamp_dimension(width, cfg.min_width),
                clamp_dimension(height, cfg.min_height),
            )
        }
    }
}

/// Placement for a newly opened window. `open_count` is the number of
/// windows already in the registry and drives the desktop cascade.
pub fn initial_geometry(
    viewport: Viewport,
    cfg: &WmConfig,
    preferred: Option<Size>,
    open_count: usize,
) -> Geometry {
    match viewport.classify(cfg.mobile_breakpoint) {
        ViewportClass::Mobile => mobile_canvas(viewport, cfg),
        ViewportClass::Desktop => {
            let (x, y) = cfg.cascade_position(open_count);
            let size = preferred.unwrap_or(Size::new(cfg.default_width, cfg.default_height));
            Geometry::new(x, y, size.width, size.height)
        }
    }
}

fn clamp_dimension(value: i64, floor: u32) -> u32 {
    value.clamp(floor as i64, u32::MAX as i64) as u32
}
