//! Change notifications published by the window registry.
//!
//! Every mutation pushes one event and bumps the registry revision. Hosts
//! either compare revisions to decide whether to repaint, or drain the queue
//! with `WindowManager::take_events` to react to specific changes.

use crate::window::{AppId, Geometry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    Opened { id: AppId },
    /// An already-open app was requested again and pulled onto the current
    /// workspace.
    Reopened { id: AppId },
    Closed { id: AppId },
    Minimized { id: AppId },
    Maximized { id: AppId, geometry: Geometry },
    Restored { id: AppId, geometry: Geometry },
    Raised { id: AppId, z_index: u64 },
    Moved { id: AppId, geometry: Geometry },
    Resized { id: AppId, geometry: Geometry },
    WorkspaceSwitched { from: u32, to: u32 },
}

impl WindowEvent {
    /// Window the event refers to, if any.
    pub fn window_id(&self) -> Option<&str> {
        match self {
            WindowEvent::Opened { id }
            | WindowEvent::Reopened { id }
            | WindowEvent::Closed { id }
            | WindowEvent::Minimized { id }
            | WindowEvent::Maximized { id, .. }
            | WindowEvent::Restored { id, .. }
            | WindowEvent::Raised { id, .. }
            | WindowEvent::Moved { id, .. }
            | WindowEvent::Resized { id, .. } => Some(id),
            WindowEvent::WorkspaceSwitched { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_switch_has_no_window() {
        let evt = WindowEvent::WorkspaceSwitched { from: 1, to: 2 };
        assert_eq!(evt.window_id(), None);
        let evt = WindowEvent::Raised {
            id: "games".into(),
            z_index: 1002,
        };
        assert_eq!(evt.window_id(), Some("games"));
    }
}
