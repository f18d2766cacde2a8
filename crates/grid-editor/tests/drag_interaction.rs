//! Integration tests: drawing rectangles through the editor session
//! (grid-editor ↔ grid-core ↔ grid-render).

use grid_core::{PixelRect, Viewport};
use grid_editor::{EditorSession, ToolOutcome};
use grid_render::{DisplayList, DrawOp};
use kurbo::Rect;
use pretty_assertions::assert_eq;

const VIEWPORT: Viewport = Viewport::new(800, 600);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn drag(session: &mut EditorSession, from: (f64, f64), to: (f64, f64)) -> ToolOutcome {
    session.pointer_down(from.0, from.1);
    session.pointer_move(to.0, to.1);
    session.pointer_up(to.0, to.1)
}

// ─── Normalization ──────────────────────────────────────────────────────

#[test]
fn drag_up_left_is_normalized() {
    init_logging();
    let mut session = EditorSession::new(VIEWPORT);
    session.set_name("Desk");
    session.set_color("#ff0000");

    drag(&mut session, (50.0, 50.0), (30.0, 20.0));

    let obj = &session.objects()[0];
    assert_eq!(obj.name, "Desk");
    assert_eq!(obj.color, "#ff0000");
    assert_eq!(
        obj.rect(),
        PixelRect {
            x: 30,
            y: 20,
            w: 20,
            h: 30
        }
    );
}

#[test]
fn zero_movement_drag_yields_one_pixel_object() {
    init_logging();
    let mut session = EditorSession::new(VIEWPORT);

    drag(&mut session, (10.0, 10.0), (10.0, 10.0));

    let obj = &session.objects()[0];
    assert_eq!((obj.x, obj.y, obj.w, obj.h), (10, 10, 1, 1));
}

#[test]
fn click_without_move_adds_nothing() {
    let mut session = EditorSession::new(VIEWPORT);
    session.pointer_down(10.0, 10.0);
    let out = session.pointer_up(10.0, 10.0);

    assert_eq!(out, ToolOutcome::Unchanged);
    assert!(session.objects().is_empty());
    assert!(!session.is_dragging());
    assert!(session.object_list().is_empty());
}

#[test]
fn release_commits_the_rectangle_last_shown() {
    let mut session = EditorSession::new(VIEWPORT);
    session.pointer_down(50.0, 50.0);
    session.pointer_move(40.0, 40.0);
    let out = session.pointer_up(30.0, 20.0);

    let ToolOutcome::Committed(obj) = out else {
        panic!("expected a committed object");
    };
    assert_eq!(
        obj.rect(),
        PixelRect {
            x: 40,
            y: 40,
            w: 10,
            h: 10
        }
    );
    assert_eq!(session.objects().len(), 1);
}

#[test]
fn all_quadrants_cover_the_same_span() {
    let corners = [(20, 30), (60, 30), (20, 70), (60, 70)];
    let expected = PixelRect {
        x: 20,
        y: 30,
        w: 40,
        h: 40,
    };

    // Every ordered pair of opposite corners describes the same rectangle.
    for &(x0, y0) in &corners {
        let (x1, y1) = (80 - x0, 100 - y0);
        let mut session = EditorSession::new(VIEWPORT);
        drag(
            &mut session,
            (x0 as f64, y0 as f64),
            (x1 as f64, y1 as f64),
        );
        assert_eq!(
            session.objects()[0].rect(),
            expected,
            "drag ({x0},{y0}) -> ({x1},{y1})"
        );
    }
}

#[test]
fn every_drag_has_positive_size_and_exact_span() {
    let points = [-15, 0, 3, 3, 17, 250];
    let mut session = EditorSession::new(VIEWPORT);

    for &x0 in &points {
        for &y0 in &points {
            for &x1 in &points {
                for &y1 in &points {
                    let out = drag(
                        &mut session,
                        (x0 as f64, y0 as f64),
                        (x1 as f64, y1 as f64),
                    );
                    let ToolOutcome::Committed(obj) = out else {
                        panic!("drag ({x0},{y0}) -> ({x1},{y1}) did not commit");
                    };
                    assert!(obj.w >= 1 && obj.h >= 1);
                    assert_eq!(obj.x, x0.min(x1));
                    assert_eq!(obj.y, y0.min(y1));
                    assert_eq!(obj.w, (x1 - x0).unsigned_abs().max(1));
                    assert_eq!(obj.h, (y1 - y0).unsigned_abs().max(1));
                }
            }
        }
    }
    assert_eq!(session.objects().len(), points.len().pow(4));
}

#[test]
fn fractional_coordinates_are_floored() {
    let mut session = EditorSession::new(VIEWPORT);
    drag(&mut session, (10.7, 10.2), (20.9, 30.99));
    let obj = &session.objects()[0];
    assert_eq!((obj.x, obj.y, obj.w, obj.h), (10, 10, 10, 20));
}

// ─── State machine ──────────────────────────────────────────────────────

#[test]
fn events_while_idle_change_nothing() {
    let mut session = EditorSession::new(VIEWPORT);
    assert_eq!(session.pointer_move(5.0, 5.0), ToolOutcome::Unchanged);
    assert_eq!(session.pointer_up(5.0, 5.0), ToolOutcome::Unchanged);
    assert!(session.objects().is_empty());
    assert!(session.preview().is_none());
}

#[test]
fn preview_lives_only_during_drag() {
    let mut session = EditorSession::new(VIEWPORT);
    session.set_color("#00ff00");

    assert_eq!(session.pointer_down(40.0, 40.0), ToolOutcome::Unchanged);
    assert!(session.is_dragging());
    assert!(session.preview().is_none());

    assert_eq!(session.pointer_move(20.0, 45.0), ToolOutcome::Redraw);
    let preview = session.preview().unwrap();
    assert_eq!((preview.w, preview.h), (-20, 5));
    assert_eq!(preview.color, "#00ff00");

    session.pointer_up(20.0, 45.0);
    assert!(!session.is_dragging());
    assert!(session.preview().is_none());
}

#[test]
fn name_defaults_to_placeholder() {
    let mut session = EditorSession::new(VIEWPORT);
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));
    session.set_name("Shelf");
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));
    session.set_name("");
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));

    let names: Vec<&str> = session.objects().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Object", "Shelf", "Object"]);
}

// ─── Object list ────────────────────────────────────────────────────────

#[test]
fn list_follows_insertion_order_not_position() {
    let mut session = EditorSession::new(VIEWPORT);

    session.set_name("far");
    drag(&mut session, (500.0, 500.0), (520.0, 530.0));
    session.set_name("origin");
    drag(&mut session, (0.0, 0.0), (5.0, 5.0));
    session.set_name("middle");
    drag(&mut session, (200.0, 200.0), (150.0, 260.0));

    assert_eq!(
        session.object_list(),
        vec![
            "far: 20×30 mm".to_string(),
            "origin: 5×5 mm".to_string(),
            "middle: 50×60 mm".to_string(),
        ]
    );
}

// ─── Rendering ──────────────────────────────────────────────────────────

#[test]
fn render_shows_objects_and_preview() {
    let mut session = EditorSession::new(Viewport::new(100, 100));
    session.set_color("#ff0000");
    drag(&mut session, (50.0, 50.0), (30.0, 20.0));

    session.set_color("#0000ff");
    session.pointer_down(0.0, 0.0);
    session.pointer_move(10.0, 10.0);

    let mut list = DisplayList::new(session.viewport());
    session.render(&mut list);

    assert_eq!(
        list.filled_rects(),
        vec![
            Rect::new(30.0, 20.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        ]
    );
    assert!(list.frame().contains(&DrawOp::SetAlpha(0.5)));
}

#[test]
fn render_after_commit_has_no_preview() {
    let mut session = EditorSession::new(Viewport::new(100, 100));
    drag(&mut session, (10.0, 10.0), (20.0, 20.0));

    let mut list = DisplayList::new(session.viewport());
    session.render(&mut list);

    assert!(!list.frame().contains(&DrawOp::SetAlpha(0.5)));
    assert_eq!(list.filled_rects().len(), 1);
}

#[test]
fn render_after_resize_covers_new_size() {
    let mut session = EditorSession::new(Viewport::new(20, 20));
    session.resize(Viewport::beside_sidebar(340, 40, 300));

    let mut list = DisplayList::new(session.viewport());
    session.render(&mut list);

    let lines = list
        .frame()
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeLine(_)))
        .count();
    // x = 0..=40 (5 lines) and y = 0..=40 (5 lines)
    assert_eq!(lines, 10);
}
