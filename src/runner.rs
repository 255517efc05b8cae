use std::io;
use std::time::Duration;

use crossterm::event::{Event, MouseEvent};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::apps::SIDEBAR_APPS;
use crate::drivers::{
    CellScale, InputDriver, PointerEvent, PointerPhase, pointer_from_mouse,
};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::{Action, KeyBindings};
use crate::layout::Viewport;
use crate::layout::floating::{HitZone, ResizeEdge};
use crate::ui::{UiFrame, render_desktop, render_help, split_status, viewport_for_area};
use crate::window::WindowManager;
use crate::window::decorator::DefaultDecorator;

/// Terminal host for a [`WindowManager`]: maps keys to launcher and window
/// actions, feeds mouse reports to the pointer router and tracks the
/// viewport as the terminal resizes.
#[derive(Debug)]
pub struct Desktop {
    wm: WindowManager,
    scale: CellScale,
    bindings: KeyBindings,
    help_visible: bool,
    decorator: DefaultDecorator,
}

impl Desktop {
    pub fn new(wm: WindowManager, scale: CellScale) -> Self {
        Self {
            wm,
            scale,
            bindings: KeyBindings::default(),
            help_visible: false,
            decorator: DefaultDecorator,
        }
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn wm_mut(&mut self) -> &mut WindowManager {
        &mut self.wm
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Recompute the viewport for a terminal of `cols` x `rows` cells.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let (desktop, _) = split_status(Rect::new(0, 0, cols, rows));
        self.wm.set_viewport(viewport_for_area(desktop, self.scale));
    }

    /// Topmost window the user can currently see.
    fn focused_id(&self) -> Option<String> {
        self.wm.paint_order().last().map(|w| w.id().to_owned())
    }

    fn apply(&mut self, action: Action) -> ControlFlow {
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::OpenApp(idx) => {
                if let Some(app) = SIDEBAR_APPS.get(idx) {
                    self.wm.open_app(app.id);
                }
            }
            Action::SwitchWorkspace(n) => self.wm.switch_workspace(n),
            Action::MinimizeFocused => {
                if let Some(id) = self.focused_id() {
                    self.wm.minimize_window(&id);
                }
            }
            Action::ToggleMaximizeFocused => {
                if let Some(id) = self.focused_id() {
                    self.wm.maximize_window(&id);
                }
            }
            Action::CloseFocused => {
                if let Some(id) = self.focused_id() {
                    self.wm.close_window(&id);
                }
            }
        }
        ControlFlow::Continue
    }

    /// Window whose top edge band covers the cell row `mouse` landed on.
    /// That row is where the title is painted, so a press there drags.
    fn title_row_target(&self, mouse: &MouseEvent, pointer: PointerEvent) -> Option<String> {
        let (id, zone) = self.wm.hit_test(pointer)?;
        if zone != HitZone::Resize(ResizeEdge::Top) {
            return None;
        }
        let window = self.wm.get_window(&id)?;
        let top_row = self.scale.to_row(window.geometry().y as i64);
        (top_row == mouse.row as i64).then_some(id)
    }

    fn route_pointer(&mut self, mouse: &MouseEvent, phase: PointerPhase, pointer: PointerEvent) {
        if self.help_visible {
            // releases still end a gesture started before the overlay opened
            if phase == PointerPhase::Up {
                self.wm.handle_pointer(phase, pointer);
            }
            return;
        }
        if phase == PointerPhase::Down
            && let Some(id) = self.title_row_target(mouse, pointer)
        {
            self.wm.start_drag(pointer, &id);
            if !self.wm.is_dragging() {
                self.wm.bring_to_front(&id);
            }
            return;
        }
        self.wm.handle_pointer(phase, pointer);
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => match self.bindings.action_for_key(key) {
                Some(action) if self.help_visible => match action {
                    Action::Quit | Action::ToggleHelp => self.apply(action),
                    _ => ControlFlow::Continue,
                },
                Some(action) => self.apply(action),
                None => ControlFlow::Continue,
            },
            Event::Mouse(mouse) => {
                if let Some((phase, pointer)) = pointer_from_mouse(mouse, self.scale) {
                    self.route_pointer(mouse, phase, pointer);
                }
                ControlFlow::Continue
            }
            Event::Resize(cols, rows) => {
                self.resize(*cols, *rows);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        let mut ui = UiFrame::new(frame);
        render_desktop(&mut ui, &self.wm, self.scale, &self.decorator);
        if self.help_visible {
            render_help(&mut ui, &self.bindings);
        }
    }
}

/// Drive `desktop` until a quit binding fires. Frames are only drawn when the
/// registry, the overlay or the viewport changed since the last one.
pub fn run_desktop<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> io::Result<()>
where
    B: Backend,
    D: InputDriver,
{
    let size = terminal
        .size()
        .map_err(|e| io::Error::other(e.to_string()))?;
    desktop.resize(size.width, size.height);

    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;

    let mut drawn: Option<(u64, bool, Viewport)> = None;
    event_loop.run(|event| {
        if let Some(event) = event {
            return Ok(desktop.handle_event(&event));
        }
        for change in desktop.wm.take_events() {
            tracing::trace!(window_id = ?change.window_id(), ?change, "window event");
        }
        let state = (desktop.wm.revision(), desktop.help_visible, desktop.wm.viewport());
        if drawn != Some(state) {
            terminal
                .draw(|frame| desktop.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;
            drawn = Some(state);
        }
        Ok(ControlFlow::Continue)
    })
}
