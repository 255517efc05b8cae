pub mod decorator;

mod window_manager;

/// Identifier of a hosted application. One window exists per app id.
pub type AppId = String;

/// Window rectangle in viewport pixels. The origin is signed so windows can
/// be dragged partly off the left/top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let (x, y) = (x as i64, y as i64);
        x >= self.x as i64 && x < self.right() && y >= self.y as i64 && y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

pub use window_manager::{Interaction, WindowManager};

/// One open application instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: AppId,
    title: String,
    icon: String,
    pub(crate) minimized: bool,
    pub(crate) maximized: bool,
    pub(crate) geometry: Geometry,
    pub(crate) saved_geometry: Option<Geometry>,
    pub(crate) z_index: u64,
    pub(crate) workspace: u32,
}

impl Window {
    pub(crate) fn new(
        id: AppId,
        title: String,
        icon: String,
        geometry: Geometry,
        z_index: u64,
        workspace: u32,
    ) -> Self {
        Self {
            id,
            title,
            icon,
            minimized: false,
            maximized: false,
            geometry,
            saved_geometry: None,
            z_index,
            workspace,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn maximized(&self) -> bool {
        self.maximized
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Geometry captured the last time the window was maximized.
    pub fn saved_geometry(&self) -> Option<Geometry> {
        self.saved_geometry
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn workspace(&self) -> u32 {
        self.workspace
    }

    pub fn is_visible_on(&self, workspace: u32) -> bool {
        self.workspace == workspace && !self.minimized
    }
}
