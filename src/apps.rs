//! Launcher catalog of the apps the desktop can host.
//!
//! Window contents are opaque to the engine; the catalog only supplies the
//! title, icon and preferred desktop size for each app id.

use crate::window::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppEntry {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const SIDEBAR_APPS: [AppEntry; 10] = [
    AppEntry {
        id: "profile",
        icon: "user",
        label: "Profile",
        color: "#cba6f7",
    },
    AppEntry {
        id: "readme",
        icon: "book",
        label: "README",
        color: "#f9e2af",
    },
    AppEntry {
        id: "focus",
        icon: "clock",
        label: "Focus",
        color: "#a6e3a1",
    },
    AppEntry {
        id: "todos",
        icon: "checkbox",
        label: "Tasks",
        color: "#89b4fa",
    },
    AppEntry {
        id: "games",
        icon: "gamepad",
        label: "Games",
        color: "#f38ba8",
    },
    AppEntry {
        id: "music",
        icon: "music",
        label: "Music",
        color: "#f5c2e7",
    },
    AppEntry {
        id: "servers",
        icon: "message",
        label: "Servers",
        color: "#89b4fa",
    },
    AppEntry {
        id: "apps",
        icon: "apps",
        label: "Apps",
        color: "#94e2d5",
    },
    AppEntry {
        id: "terminal",
        icon: "terminal",
        label: "Terminal",
        color: "#a6e3a1",
    },
    AppEntry {
        id: "settings",
        icon: "settings",
        label: "Settings",
        color: "#fab387",
    },
];

/// Icon used for app ids missing from the catalog.
pub const FALLBACK_ICON: &str = "window";

pub fn find(id: &str) -> Option<&'static AppEntry> {
    SIDEBAR_APPS.iter().find(|app| app.id == id)
}

/// Desktop size override for apps with richer content. `None` means the
/// configured baseline applies.
pub fn preferred_size(id: &str) -> Option<Size> {
    match id {
        "profile" | "servers" | "apps" => Some(Size::new(520, 600)),
        "games" => Some(Size::new(700, 650)),
        _ => None,
    }
}
