use super::{AppId, Size, Window};
use std::collections::BTreeMap;

use crate::apps;
use crate::config::WmConfig;
use crate::drivers::{PointerEvent, PointerPhase};
use crate::events::WindowEvent;
use crate::layout::floating::{
    HitZone, MoveDrag, ResizeDrag, ResizeEdge, apply_move_drag, apply_resize_drag, hit_zone,
};
use crate::layout::{Viewport, ViewportClass, initial_geometry, maximized_geometry};

/// The pointer session currently in progress. At most one window is being
/// dragged or resized at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Moving(MoveDrag),
    Resizing(ResizeDrag),
}

impl Interaction {
    pub fn target(&self) -> Option<&str> {
        match self {
            Interaction::Idle => None,
            Interaction::Moving(drag) => Some(&drag.id),
            Interaction::Resizing(drag) => Some(&drag.id),
        }
    }
}

/// Registry of open windows plus the pointer router that drives drag and
/// resize sessions against it.
///
/// All window mutations go through this type. Each one publishes a
/// [`WindowEvent`] and bumps [`revision`](Self::revision) so observers can
/// tell when to repaint.
#[derive(Debug, Clone)]
pub struct WindowManager {
    config: WmConfig,
    viewport: Viewport,
    windows: BTreeMap<AppId, Window>,
    highest_z_index: u64,
    current_workspace: u32,
    interaction: Interaction,
    // drained by the host via `take_events`
    events: Vec<WindowEvent>,
    revision: u64,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WmConfig::default(), Viewport::default())
    }
}

impl WindowManager {
    pub fn new(config: WmConfig, viewport: Viewport) -> Self {
        Self {
            highest_z_index: config.initial_z_index,
            config,
            viewport,
            windows: BTreeMap::new(),
            current_workspace: crate::constants::DEFAULT_WORKSPACE,
            interaction: Interaction::Idle,
            events: Vec::new(),
            revision: 0,
        }
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record the host's current viewport. Existing windows are not
    /// reflowed; the new size only affects later opens and maximizes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            tracing::debug!(width = viewport.width, height = viewport.height, "viewport changed");
            self.viewport = viewport;
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.classify(self.config.mobile_breakpoint) == ViewportClass::Mobile
    }

    fn min_size(&self) -> Size {
        Size::new(self.config.min_width, self.config.min_height)
    }

    fn publish(&mut self, event: WindowEvent) {
        self.revision = self.revision.wrapping_add(1);
        self.events.push(event);
    }

    /// Open `app_id`, or pull the existing window forward onto the current
    /// workspace if it is already open.
    pub fn open_window(
        &mut self,
        app_id: impl Into<AppId>,
        title: impl Into<String>,
        icon: impl Into<String>,
    ) {
        let app_id = app_id.into();
        let workspace = self.current_workspace;
        if let Some(window) = self.windows.get_mut(&app_id) {
            window.minimized = false;
            window.workspace = workspace;
            tracing::debug!(window_id = %app_id, workspace, "reopened window");
            self.publish(WindowEvent::Reopened { id: app_id.clone() });
            self.bring_to_front(&app_id);
            return;
        }

        let mobile = self.is_mobile();
        let geometry = initial_geometry(
            self.viewport,
            &self.config,
            apps::preferred_size(&app_id),
            self.windows.len(),
        );
        self.highest_z_index += 1;
        let mut window = Window::new(
            app_id.clone(),
            title.into(),
            icon.into(),
            geometry,
            self.highest_z_index,
            workspace,
        );
        window.maximized = mobile;
        tracing::debug!(
            window_id = %app_id,
            z = self.highest_z_index,
            workspace,
            mobile,
            "opened window"
        );
        self.windows.insert(app_id.clone(), window);
        self.publish(WindowEvent::Opened { id: app_id });
    }

    /// Open a catalog app using its catalog label and icon.
    pub fn open_app(&mut self, app_id: &str) {
        match apps::find(app_id) {
            Some(app) => self.open_window(app.id, app.label, app.icon),
            None => self.open_window(app_id, app_id, apps::FALLBACK_ICON),
        }
    }

    pub fn close_window(&mut self, app_id: &str) {
        if self.windows.remove(app_id).is_none() {
            return;
        }
        if self.interaction.target() == Some(app_id) {
            tracing::debug!(window_id = %app_id, "pointer session ended by close");
            self.interaction = Interaction::Idle;
        }
        tracing::debug!(window_id = %app_id, "closing window");
        self.publish(WindowEvent::Closed { id: app_id.into() });
    }

    pub fn minimize_window(&mut self, app_id: &str) {
        let Some(window) = self.windows.get_mut(app_id) else {
            return;
        };
        window.minimized = true;
        tracing::debug!(window_id = %app_id, "minimized window");
        self.publish(WindowEvent::Minimized { id: app_id.into() });
    }

    /// Toggle between maximized and the geometry saved on the way in.
    pub fn maximize_window(&mut self, app_id: &str) {
        let full = maximized_geometry(self.viewport, &self.config);
        let Some(window) = self.windows.get_mut(app_id) else {
            return;
        };
        let event = if window.maximized {
            if let Some(saved) = window.saved_geometry {
                window.geometry = saved;
            }
            window.maximized = false;
            tracing::debug!(window_id = %app_id, geometry = ?window.geometry, "restored window");
            WindowEvent::Restored {
                id: app_id.into(),
                geometry: window.geometry,
            }
        } else {
            window.saved_geometry = Some(window.geometry);
            window.geometry = full;
            window.maximized = true;
            tracing::debug!(window_id = %app_id, geometry = ?full, "maximized window");
            WindowEvent::Maximized {
                id: app_id.into(),
                geometry: full,
            }
        };
        self.publish(event);
    }

    /// Give `app_id` the top stacking slot. Does nothing if it already holds
    /// it, so the counter only moves when the order actually changes.
    pub fn bring_to_front(&mut self, app_id: &str) {
        let Some(window) = self.windows.get_mut(app_id) else {
            return;
        };
        if window.z_index == self.highest_z_index {
            return;
        }
        self.highest_z_index += 1;
        window.z_index = self.highest_z_index;
        let z_index = window.z_index;
        self.publish(WindowEvent::Raised {
            id: app_id.into(),
            z_index,
        });
    }

    /// Change the active workspace. Window membership is untouched.
    pub fn switch_workspace(&mut self, workspace: u32) {
        let from = self.current_workspace;
        if from == workspace {
            return;
        }
        self.current_workspace = workspace;
        tracing::debug!(from, to = workspace, "switched workspace");
        self.publish(WindowEvent::WorkspaceSwitched {
            from,
            to: workspace,
        });
    }

    pub fn get_window(&self, app_id: &str) -> Option<&Window> {
        self.windows.get(app_id)
    }

    /// All open windows, ordered by app id.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Windows on the current workspace that are not minimized.
    pub fn visible_windows(&self) -> impl Iterator<Item = &Window> {
        let workspace = self.current_workspace;
        self.windows
            .values()
            .filter(move |window| window.is_visible_on(workspace))
    }

    /// Visible windows from bottom to top.
    pub fn paint_order(&self) -> Vec<&Window> {
        let mut order: Vec<&Window> = self.visible_windows().collect();
        order.sort_by_key(|window| window.z_index);
        order
    }

    /// Open window with the highest z-index. Minimized windows and other
    /// workspaces count; use [`paint_order`](Self::paint_order) for the
    /// topmost visible one.
    pub fn focused_window(&self) -> Option<&Window> {
        self.windows.values().max_by_key(|window| window.z_index)
    }

    pub fn current_workspace(&self) -> u32 {
        self.current_workspace
    }

    pub fn highest_z_index(&self) -> u64 {
        self.highest_z_index
    }

    /// Monotonic change counter; bumps once per published event.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Moving(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.interaction, Interaction::Resizing(_))
    }

    fn begin_interaction(&mut self, next: Interaction) {
        if let Some(previous) = self.interaction.target() {
            tracing::debug!(window_id = %previous, "replacing active pointer session");
        }
        self.interaction = next;
    }

    /// Begin moving `app_id` with the pointer. Maximized windows stay put.
    pub fn start_drag(&mut self, pointer: PointerEvent, app_id: &str) {
        let Some(window) = self.windows.get(app_id) else {
            return;
        };
        if window.maximized {
            return;
        }
        let drag = MoveDrag {
            id: app_id.into(),
            offset_x: pointer.x.saturating_sub(window.geometry.x),
            offset_y: pointer.y.saturating_sub(window.geometry.y),
        };
        tracing::debug!(window_id = %app_id, "drag started");
        self.begin_interaction(Interaction::Moving(drag));
        self.bring_to_front(app_id);
    }

    /// Begin resizing `app_id` from the grabbed edge or corner.
    pub fn start_resize(&mut self, pointer: PointerEvent, app_id: &str, edge: ResizeEdge) {
        let Some(window) = self.windows.get(app_id) else {
            return;
        };
        let drag = ResizeDrag {
            id: app_id.into(),
            edge,
            start_pointer: pointer,
            start: window.geometry,
        };
        tracing::debug!(window_id = %app_id, %edge, "resize started");
        self.begin_interaction(Interaction::Resizing(drag));
        self.bring_to_front(app_id);
    }

    /// Apply a pointer move to the active session, if any.
    pub fn handle_mouse_move(&mut self, pointer: PointerEvent) {
        let min = self.min_size();
        let event = match &self.interaction {
            Interaction::Idle => None,
            Interaction::Moving(drag) => self.windows.get_mut(&drag.id).map(|window| {
                window.geometry = apply_move_drag(window.geometry, drag, pointer);
                WindowEvent::Moved {
                    id: drag.id.clone(),
                    geometry: window.geometry,
                }
            }),
            Interaction::Resizing(drag) => self.windows.get_mut(&drag.id).map(|window| {
                window.geometry = apply_resize_drag(window.geometry, drag, pointer, min);
                WindowEvent::Resized {
                    id: drag.id.clone(),
                    geometry: window.geometry,
                }
            }),
        };
        if let Some(event) = event {
            self.publish(event);
        }
    }

    /// End whichever session is active. The last computed geometry stays.
    pub fn handle_mouse_up(&mut self) {
        if let Some(id) = self.interaction.target() {
            tracing::debug!(window_id = %id, "pointer session ended");
        }
        self.interaction = Interaction::Idle;
    }

    /// Topmost visible window under the pointer and the zone that was hit.
    pub fn hit_test(&self, pointer: PointerEvent) -> Option<(AppId, HitZone)> {
        self.paint_order().into_iter().rev().find_map(|window| {
            hit_zone(window.geometry, pointer.x, pointer.y, &self.config)
                .map(|zone| (window.id().to_owned(), zone))
        })
    }

    /// Route a pointer press: edges start a resize, the title bar starts a
    /// drag and anywhere else just focuses. Returns `false` when the press
    /// landed on the bare desktop.
    pub fn handle_pointer_down(&mut self, pointer: PointerEvent) -> bool {
        let Some((id, zone)) = self.hit_test(pointer) else {
            return false;
        };
        match zone {
            HitZone::Resize(edge) => self.start_resize(pointer, &id, edge),
            HitZone::TitleBar if !self.windows.get(&id).is_some_and(|w| w.maximized) => {
                self.start_drag(pointer, &id)
            }
            HitZone::TitleBar | HitZone::Body => self.bring_to_front(&id),
        }
        true
    }

    /// Single entry point for global pointer handlers.
    pub fn handle_pointer(&mut self, phase: PointerPhase, pointer: PointerEvent) -> bool {
        match phase {
            PointerPhase::Down => self.handle_pointer_down(pointer),
            PointerPhase::Move => {
                let active = self.interaction != Interaction::Idle;
                self.handle_mouse_move(pointer);
                active
            }
            PointerPhase::Up => {
                let active = self.interaction != Interaction::Idle;
                self.handle_mouse_up();
                active
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Geometry;

    fn desktop() -> WindowManager {
        WindowManager::new(WmConfig::default(), Viewport::new(1280, 800))
    }

    fn geometry(wm: &WindowManager, id: &str) -> Geometry {
        wm.get_window(id).expect("window open").geometry()
    }

    #[test]
    fn first_desktop_window_uses_cascade_origin() {
        let mut wm = desktop();
        wm.open_window("terminal", "Terminal", "terminal");
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(116, 36, 640, 520));
        assert_eq!(wm.get_window("terminal").unwrap().z_index(), 1001);
        assert_eq!(wm.highest_z_index(), 1001);
    }

    #[test]
    fn cascade_staggers_by_window_count() {
        let mut wm = desktop();
        wm.open_app("readme");
        wm.open_app("games");
        wm.open_app("profile");
        assert_eq!(geometry(&wm, "games"), Geometry::new(156, 76, 700, 650));
        assert_eq!(geometry(&wm, "profile"), Geometry::new(196, 116, 520, 600));
    }

    #[test]
    fn reopen_does_not_duplicate_or_move() {
        let mut wm = desktop();
        wm.open_app("profile");
        wm.open_app("terminal");
        let before = geometry(&wm, "profile");
        wm.minimize_window("profile");
        wm.switch_workspace(3);
        wm.open_app("profile");
        assert_eq!(wm.window_count(), 2);
        let profile = wm.get_window("profile").unwrap();
        assert!(!profile.minimized());
        assert_eq!(profile.workspace(), 3);
        assert_eq!(profile.geometry(), before);
        assert_eq!(profile.z_index(), wm.highest_z_index());
    }

    #[test]
    fn reopening_topmost_keeps_counter() {
        let mut wm = desktop();
        wm.open_app("terminal");
        let z = wm.highest_z_index();
        wm.open_app("terminal");
        assert_eq!(wm.highest_z_index(), z);
    }

    #[test]
    fn mobile_windows_fill_viewport_and_start_maximized() {
        let mut wm = WindowManager::new(WmConfig::default(), Viewport::new(390, 844));
        wm.open_app("games");
        wm.open_app("terminal");
        let games = wm.get_window("games").unwrap();
        assert!(games.maximized());
        assert_eq!(games.geometry(), Geometry::new(0, 0, 390, 774));
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(0, 0, 390, 774));
    }

    #[test]
    fn viewport_is_read_at_open_time() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.set_viewport(Viewport::new(600, 900));
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(116, 36, 640, 520));
        wm.open_app("music");
        assert_eq!(geometry(&wm, "music"), Geometry::new(0, 0, 600, 830));
    }

    #[test]
    fn close_and_minimize_are_idempotent() {
        let mut wm = desktop();
        wm.close_window("ghost");
        wm.minimize_window("ghost");
        wm.maximize_window("ghost");
        wm.bring_to_front("ghost");
        assert_eq!(wm.revision(), 0);
        wm.open_app("terminal");
        wm.close_window("terminal");
        wm.close_window("terminal");
        assert_eq!(wm.window_count(), 0);
    }

    #[test]
    fn maximize_round_trip_restores_geometry() {
        let mut wm = desktop();
        wm.open_window("terminal", "Terminal", "terminal");
        wm.maximize_window("terminal");
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(96, 16, 1168, 768));
        assert!(wm.get_window("terminal").unwrap().maximized());
        wm.maximize_window("terminal");
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(116, 36, 640, 520));
        let window = wm.get_window("terminal").unwrap();
        assert!(!window.maximized());
        assert_eq!(
            window.saved_geometry(),
            Some(Geometry::new(116, 36, 640, 520))
        );
    }

    #[test]
    fn restore_without_snapshot_keeps_geometry() {
        let mut wm = WindowManager::new(WmConfig::default(), Viewport::new(400, 700));
        wm.open_app("terminal");
        let g = geometry(&wm, "terminal");
        wm.maximize_window("terminal");
        assert!(!wm.get_window("terminal").unwrap().maximized());
        assert_eq!(geometry(&wm, "terminal"), g);
    }

    #[test]
    fn restore_honours_zero_origin() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.start_drag(PointerEvent::new(200, 50), "terminal");
        wm.handle_mouse_move(PointerEvent::new(84, 14));
        wm.handle_mouse_up();
        assert_eq!(geometry(&wm, "terminal").x, 0);
        assert_eq!(geometry(&wm, "terminal").y, 0);
        wm.maximize_window("terminal");
        wm.maximize_window("terminal");
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(0, 0, 640, 520));
    }

    #[test]
    fn bring_to_front_only_increments_when_needed() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        assert_eq!(wm.highest_z_index(), 1002);
        wm.bring_to_front("music");
        assert_eq!(wm.highest_z_index(), 1002);
        wm.bring_to_front("terminal");
        assert_eq!(wm.highest_z_index(), 1003);
        assert_eq!(wm.focused_window().map(|w| w.id()), Some("terminal"));
    }

    #[test]
    fn switching_workspace_filters_visible_set() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.switch_workspace(2);
        wm.open_app("music");
        let visible: Vec<_> = wm.visible_windows().map(|w| w.id().to_owned()).collect();
        assert_eq!(visible, vec!["music".to_owned()]);
        assert_eq!(wm.get_window("terminal").unwrap().workspace(), 1);
        wm.switch_workspace(1);
        let visible: Vec<_> = wm.visible_windows().map(|w| w.id().to_owned()).collect();
        assert_eq!(visible, vec!["terminal".to_owned()]);
    }

    #[test]
    fn drag_follows_pointer_minus_offset() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.start_drag(PointerEvent::new(200, 50), "terminal");
        assert!(wm.is_dragging());
        wm.handle_mouse_move(PointerEvent::new(300, 150));
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(216, 136, 640, 520));
        wm.handle_mouse_up();
        assert_eq!(wm.interaction(), &Interaction::Idle);
        wm.handle_mouse_move(PointerEvent::new(900, 900));
        assert_eq!(geometry(&wm, "terminal"), Geometry::new(216, 136, 640, 520));
    }

    #[test]
    fn maximized_window_is_not_draggable() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.maximize_window("terminal");
        let g = geometry(&wm, "terminal");
        wm.start_drag(PointerEvent::new(300, 30), "terminal");
        assert!(!wm.is_dragging());
        wm.handle_mouse_move(PointerEvent::new(600, 400));
        wm.handle_mouse_up();
        assert_eq!(geometry(&wm, "terminal"), g);
    }

    #[test]
    fn resize_respects_floor() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.start_resize(PointerEvent::new(756, 556), "terminal", ResizeEdge::BottomRight);
        assert!(wm.is_resizing());
        wm.handle_mouse_move(PointerEvent::new(0, 0));
        let g = geometry(&wm, "terminal");
        assert_eq!((g.width, g.height), (320, 240));
        assert_eq!((g.x, g.y), (116, 36));
        wm.handle_mouse_up();
        assert!(!wm.is_resizing());
    }

    #[test]
    fn new_session_replaces_previous() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        wm.start_drag(PointerEvent::new(200, 50), "terminal");
        wm.start_resize(PointerEvent::new(0, 0), "music", ResizeEdge::Right);
        assert!(wm.is_resizing());
        assert_eq!(wm.interaction().target(), Some("music"));
    }

    #[test]
    fn session_start_raises_target() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        wm.start_resize(PointerEvent::new(0, 0), "terminal", ResizeEdge::Left);
        assert_eq!(wm.focused_window().map(|w| w.id()), Some("terminal"));
    }

    #[test]
    fn pointer_down_routes_by_zone() {
        let mut wm = desktop();
        wm.open_app("terminal");
        // title bar
        assert!(wm.handle_pointer(PointerPhase::Down, PointerEvent::new(300, 50)));
        assert!(wm.is_dragging());
        wm.handle_pointer(PointerPhase::Up, PointerEvent::new(300, 50));
        // bottom-right corner
        assert!(wm.handle_pointer(PointerPhase::Down, PointerEvent::new(754, 554)));
        assert!(matches!(
            wm.interaction(),
            Interaction::Resizing(ResizeDrag {
                edge: ResizeEdge::BottomRight,
                ..
            })
        ));
        wm.handle_pointer(PointerPhase::Up, PointerEvent::new(754, 554));
        // body
        assert!(wm.handle_pointer(PointerPhase::Down, PointerEvent::new(300, 300)));
        assert_eq!(wm.interaction(), &Interaction::Idle);
        // desktop
        assert!(!wm.handle_pointer(PointerPhase::Down, PointerEvent::new(5, 5)));
    }

    #[test]
    fn hit_test_picks_topmost() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        // (200, 200) lies inside both cascaded windows.
        let hit = wm.hit_test(PointerEvent::new(200, 200));
        assert_eq!(hit, Some(("music".to_owned(), HitZone::Body)));
        wm.bring_to_front("terminal");
        let hit = wm.hit_test(PointerEvent::new(200, 200));
        assert_eq!(hit.map(|(id, _)| id), Some("terminal".to_owned()));
    }

    #[test]
    fn events_and_revision_track_mutations() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.minimize_window("terminal");
        wm.switch_workspace(2);
        assert_eq!(wm.revision(), 3);
        let events = wm.take_events();
        assert_eq!(
            events,
            vec![
                WindowEvent::Opened {
                    id: "terminal".into()
                },
                WindowEvent::Minimized {
                    id: "terminal".into()
                },
                WindowEvent::WorkspaceSwitched { from: 1, to: 2 },
            ]
        );
        assert!(wm.take_events().is_empty());
    }

    #[test]
    fn unknown_app_uses_fallback_metadata() {
        let mut wm = desktop();
        wm.open_app("calculator");
        let w = wm.get_window("calculator").unwrap();
        assert_eq!(w.title(), "calculator");
        assert_eq!(w.icon(), apps::FALLBACK_ICON);
    }

    #[test]
    fn closing_target_ends_its_session() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        wm.start_drag(PointerEvent::new(300, 90), "music");
        wm.close_window("music");
        assert_eq!(wm.interaction(), &Interaction::Idle);
        wm.open_app("music");
        let reopened = geometry(&wm, "music");
        wm.handle_mouse_move(PointerEvent::new(900, 700));
        assert_eq!(geometry(&wm, "music"), reopened);
    }

    #[test]
    fn closing_other_window_keeps_session() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        wm.start_drag(PointerEvent::new(300, 90), "music");
        wm.close_window("terminal");
        assert_eq!(wm.interaction().target(), Some("music"));
    }

    #[test]
    fn focus_falls_back_after_top_window_closes() {
        let mut wm = desktop();
        wm.open_app("terminal");
        wm.open_app("music");
        wm.close_window("music");
        assert_eq!(wm.focused_window().map(|w| w.id()), Some("terminal"));
        wm.close_window("terminal");
        assert!(wm.focused_window().is_none());
    }
}
