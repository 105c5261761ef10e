use super::*;

use crate::color::Rgb;
use crate::flow::Stage;
use crate::geom::Point;

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_pad_is_blank_and_drawing() {
    let pad = PadCore::new(300.0, 200.0, 1.0);
    assert_eq!(pad.stage(), Stage::Drawing);
    assert!(!pad.has_ink());
    assert!(!pad.is_drawing());
    assert!(pad.pending_capture().is_none());
    assert_eq!(pad.pen().width, 3.0);
    assert_eq!(pad.pen().color, Rgb::BLACK);
}

// =============================================================
// Pen controls
// =============================================================

#[test]
fn pen_width_is_clamped() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.set_pen_width(0.2);
    assert_eq!(pad.pen().width, 1.0);
    pad.set_pen_width(50.0);
    assert_eq!(pad.pen().width, 20.0);
    pad.set_pen_width(8.0);
    assert_eq!(pad.pen().width, 8.0);
}

#[test]
fn pen_color_is_applied_to_segments() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.set_pen_color(Rgb::new(200, 0, 0));
    pad.pointer_down(Point::new(10.0, 50.0));
    pad.pointer_move(Point::new(60.0, 50.0));
    pad.pointer_up();

    assert_eq!(pad.surface().pixel(30, 50), Some([200, 0, 0, 255]));
}

// =============================================================
// Pointer input
// =============================================================

#[test]
fn move_without_down_leaves_no_ink() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    assert!(!pad.pointer_move(Point::new(40.0, 40.0)));
    assert!(!pad.has_ink());
}

#[test]
fn down_move_up_draws_one_stroke() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    assert!(pad.is_drawing());
    assert!(pad.pointer_move(Point::new(50.0, 10.0)));
    pad.pointer_up();
    assert!(!pad.is_drawing());
    assert!(pad.has_ink());
}

#[test]
fn pointer_down_is_ignored_while_previewing() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));
    pad.pointer_up();
    pad.request_capture(1).unwrap();

    pad.pointer_down(Point::new(20.0, 20.0));
    assert!(!pad.is_drawing());
}

// =============================================================
// Capture flow
// =============================================================

#[test]
fn empty_capture_is_rejected_without_state_change() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    let err = pad.request_capture(1).unwrap_err();
    assert!(matches!(err, CaptureError::EmptySurface));
    assert_eq!(pad.stage(), Stage::Drawing);
    assert!(pad.pending_capture().is_none());
    assert!(!pad.has_ink());
}

#[test]
fn capture_after_drawing_enters_preview() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));
    pad.pointer_up();

    let timestamp = pad.request_capture(42).unwrap().timestamp_ms();
    assert_eq!(timestamp, 42);
    assert_eq!(pad.stage(), Stage::Previewing);
    assert!(pad.pending_capture().is_some());
}

#[test]
fn capture_ends_an_active_stroke() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));

    pad.request_capture(1).unwrap();
    assert!(!pad.is_drawing());
}

#[test]
fn redraw_keeps_surface_content() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));
    pad.pointer_up();
    pad.request_capture(1).unwrap();

    pad.redraw();
    assert_eq!(pad.stage(), Stage::Drawing);
    assert!(pad.pending_capture().is_none());
    assert!(pad.has_ink());
}

#[test]
fn confirm_hands_over_the_capture() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));
    pad.pointer_up();
    pad.request_capture(9).unwrap();

    let capture = pad.confirm().unwrap();
    assert_eq!(capture.timestamp_ms(), 9);
    assert_eq!(pad.stage(), Stage::Drawing);
    assert!(pad.pending_capture().is_none());
}

#[test]
fn confirm_without_pending_is_none() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    assert!(pad.confirm().is_none());
}

#[test]
fn a_second_capture_supersedes_the_first() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));
    pad.pointer_up();
    pad.request_capture(1).unwrap();
    pad.redraw();
    pad.request_capture(2).unwrap();

    assert_eq!(pad.confirm().unwrap().timestamp_ms(), 2);
}

// =============================================================
// Clear and resize
// =============================================================

#[test]
fn clear_removes_ink_and_ends_the_stroke() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));

    pad.clear();
    assert!(!pad.has_ink());
    assert!(!pad.is_drawing());
}

#[test]
fn resize_discards_ink_and_ends_the_stroke() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));

    let reallocated = pad.resize(120.0, 100.0, 1.0);
    assert!(reallocated);
    assert!(!pad.has_ink());
    assert!(!pad.is_drawing());
}

#[test]
fn resize_to_same_size_preserves_ink() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.pointer_down(Point::new(10.0, 10.0));
    pad.pointer_move(Point::new(50.0, 10.0));
    pad.pointer_up();

    let reallocated = pad.resize(100.0, 100.0, 1.0);
    assert!(!reallocated);
    assert!(pad.has_ink());
}

#[test]
fn resize_before_any_stroke_keeps_has_ink_false() {
    let mut pad = PadCore::new(100.0, 100.0, 1.0);
    pad.resize(200.0, 150.0, 2.0);
    assert!(!pad.has_ink());
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn identical_input_replays_are_identical() {
    let script = |pad: &mut PadCore| {
        pad.set_pen_width(6.0);
        pad.set_pen_color(Rgb::new(10, 60, 110));
        pad.pointer_down(Point::new(12.0, 80.0));
        pad.pointer_move(Point::new(44.0, 22.0));
        pad.pointer_move(Point::new(78.0, 64.0));
        pad.pointer_up();
    };

    let mut a = PadCore::new(100.0, 100.0, 1.0);
    let mut b = PadCore::new(100.0, 100.0, 1.0);
    script(&mut a);
    script(&mut b);
    assert_eq!(a.surface().data(), b.surface().data());
}
