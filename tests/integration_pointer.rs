use desk_wm::config::WmConfig;
use desk_wm::drivers::{PointerEvent, PointerPhase};
use desk_wm::layout::Viewport;
use desk_wm::layout::floating::{HitZone, ResizeEdge};
use desk_wm::window::{Geometry, Interaction, WindowManager};

fn with_terminal() -> WindowManager {
    let mut wm = WindowManager::new(WmConfig::default(), Viewport::new(1280, 800));
    wm.open_app("terminal");
    wm
}

fn geometry(wm: &WindowManager, id: &str) -> Geometry {
    wm.get_window(id).expect("window open").geometry()
}

#[test]
fn west_edge_moves_origin_until_floor_then_freezes() {
    let mut wm = with_terminal();
    wm.start_resize(PointerEvent::new(116, 300), "terminal", ResizeEdge::Left);
    wm.handle_mouse_move(PointerEvent::new(216, 300));
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(216, 36, 540, 520));
    wm.handle_mouse_move(PointerEvent::new(600, 300));
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(216, 36, 540, 520));
    wm.handle_mouse_move(PointerEvent::new(16, 300));
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(16, 36, 740, 520));
    wm.handle_mouse_up();
}

#[test]
fn north_edge_can_cross_viewport_top() {
    let mut wm = with_terminal();
    wm.start_resize(PointerEvent::new(400, 36), "terminal", ResizeEdge::Top);
    wm.handle_mouse_move(PointerEvent::new(999, -100));
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(116, -100, 640, 656));
}

#[test]
fn corner_combines_both_axes() {
    let mut wm = with_terminal();
    wm.start_resize(PointerEvent::new(116, 556), "terminal", ResizeEdge::BottomLeft);
    wm.handle_mouse_move(PointerEvent::new(66, 606));
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(66, 36, 690, 570));
    wm.handle_mouse_up();

    wm.start_resize(PointerEvent::new(756, 36), "terminal", ResizeEdge::TopRight);
    wm.handle_mouse_move(PointerEvent::new(700, 1000));
    let g = geometry(&wm, "terminal");
    assert_eq!((g.y, g.height), (36, 570));
    assert_eq!(g.width, 634);
}

#[test]
fn floor_holds_under_arbitrary_pointer_paths() {
    let mut wm = with_terminal();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed % 3000) as i32 - 1000
    };
    for edge in ResizeEdge::ALL {
        let start = PointerEvent::new(next(), next());
        wm.start_resize(start, "terminal", edge);
        for _ in 0..50 {
            wm.handle_mouse_move(PointerEvent::new(next(), next()));
            let g = geometry(&wm, "terminal");
            assert!(g.width >= 320, "{edge}: width {}", g.width);
            assert!(g.height >= 240, "{edge}: height {}", g.height);
        }
        wm.handle_mouse_up();
    }
}

#[test]
fn dragging_one_window_leaves_others_alone() {
    let mut wm = with_terminal();
    wm.open_app("music");
    wm.open_app("readme");
    let music = geometry(&wm, "music");
    let readme = geometry(&wm, "readme");
    wm.start_drag(PointerEvent::new(300, 50), "terminal");
    for step in 0..20 {
        wm.handle_mouse_move(PointerEvent::new(300 + step * 7, 50 + step * 3));
    }
    wm.handle_mouse_up();
    assert_eq!(geometry(&wm, "music"), music);
    assert_eq!(geometry(&wm, "readme"), readme);
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(249, 93, 640, 520));
}

#[test]
fn resize_grip_never_starts_a_drag() {
    let mut wm = with_terminal();
    // top-left corner band overlaps the title bar
    assert_eq!(
        wm.hit_test(PointerEvent::new(118, 38)),
        Some(("terminal".to_owned(), HitZone::Resize(ResizeEdge::TopLeft)))
    );
    wm.handle_pointer(PointerPhase::Down, PointerEvent::new(118, 38));
    assert!(wm.is_resizing());
    assert!(!wm.is_dragging());
}

#[test]
fn full_gesture_through_single_entry_point() {
    let mut wm = with_terminal();
    assert!(wm.handle_pointer(PointerPhase::Down, PointerEvent::new(400, 50)));
    assert!(wm.handle_pointer(PointerPhase::Move, PointerEvent::new(500, 150)));
    assert!(wm.handle_pointer(PointerPhase::Up, PointerEvent::new(500, 150)));
    assert_eq!(wm.interaction(), &Interaction::Idle);
    assert_eq!(geometry(&wm, "terminal"), Geometry::new(216, 136, 640, 520));
    // idle moves and releases are not consumed
    assert!(!wm.handle_pointer(PointerPhase::Move, PointerEvent::new(10, 10)));
    assert!(!wm.handle_pointer(PointerPhase::Up, PointerEvent::new(10, 10)));
}

#[test]
fn maximized_title_bar_press_only_focuses() {
    let mut wm = with_terminal();
    wm.open_app("music");
    wm.maximize_window("terminal");
    wm.maximize_window("music");
    assert!(wm.handle_pointer(PointerPhase::Down, PointerEvent::new(600, 30)));
    assert_eq!(wm.interaction(), &Interaction::Idle);
    assert_eq!(wm.focused_window().map(|w| w.id()), Some("music"));
}
