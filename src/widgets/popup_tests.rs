//! Tests for widgets/popup

use super::*;

#[test]
fn test_centered_popup_basic() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let popup = centered_popup(frame, 40, 20);

    assert_eq!(popup.x, 30);
    assert_eq!(popup.y, 15);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 20);
}

#[test]
fn test_centered_popup_too_large_is_clamped() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let popup = centered_popup(frame, 200, 100);

    assert_eq!(popup.width, 100);
    assert_eq!(popup.height, 50);
    assert_eq!(popup.x, 0);
    assert_eq!(popup.y, 0);
}

#[test]
fn test_centered_popup_respects_frame_origin() {
    let frame = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 20,
    };

    let popup = centered_popup(frame, 20, 10);

    assert_eq!(popup.x, 20);
    assert_eq!(popup.y, 10);
}

#[test]
fn test_top_right_popup_basic() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    let popup = top_right_popup(frame, 30, 3, 1);

    assert_eq!(popup.x, 49);
    assert_eq!(popup.y, 1);
    assert_eq!(popup.width, 30);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_top_right_popup_wider_than_frame() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 20,
        height: 10,
    };

    let popup = top_right_popup(frame, 50, 3, 1);

    assert_eq!(popup.width, 19);
    assert_eq!(popup.x, 0);
    assert!(popup.x + popup.width <= frame.width);
}
