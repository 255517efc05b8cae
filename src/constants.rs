//! Shared crate-wide constants.
//!
//! All values are in CSS pixels unless noted otherwise. `WmConfig::default()`
//! is built from these, so tweaking a value here changes the stock layout.

/// Smallest width a window may be resized to.
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Smallest height a window may be resized to.
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Viewports at or below this width are laid out as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Vertical space reserved for the mobile navigation chrome. Mobile windows
/// fill the viewport minus this allowance.
pub const MOBILE_CHROME_HEIGHT: u32 = 70;

/// Left margin kept clear for the dock when a desktop window is maximized.
pub const DOCK_MARGIN: i32 = 96;

/// Top, right and bottom inset of a maximized desktop window.
pub const EDGE_MARGIN: i32 = 16;

/// Gap added to the cascade origin before the first window is placed.
pub const CASCADE_GAP: i32 = 16;

/// Cascade origin before the gap is applied. The first desktop window lands
/// at `(CASCADE_ORIGIN_X + CASCADE_GAP, CASCADE_ORIGIN_Y + CASCADE_GAP)`.
pub const CASCADE_ORIGIN_X: i32 = 100;
pub const CASCADE_ORIGIN_Y: i32 = 20;

/// Per-window offset applied along both axes so cascading opens don't
/// fully overlap.
pub const CASCADE_STEP: i32 = 40;

/// Baseline desktop size for apps without a catalog override.
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 520;

/// Stacking counter value before the first window is opened.
pub const INITIAL_Z_INDEX: u64 = 1000;

/// Workspace that is active when a registry is created.
pub const DEFAULT_WORKSPACE: u32 = 1;

/// Thickness of the invisible resize band along each window edge.
pub const RESIZE_BORDER: u32 = 6;

/// Height of the title bar that starts a drag.
pub const TITLE_BAR_HEIGHT: u32 = 32;
