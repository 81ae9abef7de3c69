//! Tests for widgets/popup

use super::*;

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

#[test]
fn test_popup_below_location() {
    let popup = popup_at_location(screen(), 10, 3, 20, 7, 1);

    assert_eq!(popup.x, 10);
    assert_eq!(popup.y, 3);
    assert_eq!(popup.width, 20);
    assert_eq!(popup.height, 7);
}

#[test]
fn test_popup_flips_above_when_no_room_below() {
    let popup = popup_at_location(screen(), 10, 20, 20, 7, 1);

    // Ends on the row above the caret line (row 19)
    assert_eq!(popup.y, 12);
    assert_eq!(popup.y + popup.height, 19);
}

#[test]
fn test_popup_pinned_to_bottom_when_no_room_either_side() {
    let bounds = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 8,
    };

    let popup = popup_at_location(bounds, 0, 4, 10, 7, 1);

    assert_eq!(popup.y, 1);
    assert_eq!(popup.height, 7);
}

#[test]
fn test_popup_shifted_left_at_right_edge() {
    let popup = popup_at_location(screen(), 75, 2, 20, 5, 1);

    assert_eq!(popup.x, 60);
    assert_eq!(popup.x + popup.width, 80);
}

#[test]
fn test_popup_too_large_is_clamped() {
    let popup = popup_at_location(screen(), 5, 5, 200, 100, 1);

    assert_eq!(popup.width, 80);
    assert_eq!(popup.height, 24);
    assert_eq!(popup.x, 0);
    assert_eq!(popup.y, 0);
}

#[test]
fn test_popup_respects_offset_bounds() {
    let bounds = Rect {
        x: 10,
        y: 5,
        width: 40,
        height: 15,
    };

    let popup = popup_at_location(bounds, 0, 0, 10, 4, 1);

    assert_eq!(popup.x, 10);
    assert_eq!(popup.y, 5);
}
