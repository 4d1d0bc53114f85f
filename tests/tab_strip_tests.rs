//! Integration tests for the tab strip gesture protocol
//!
//! Drives the press/hover/release drag session against real pinned and
//! recent lists and checks that gestures settle the way the widget
//! expects: clicks activate, drags reorder and never activate.

mod common;

use common::{sample_menu, visible_paths};
use gpui_navshell::*;

fn pinned_three() -> PinnedTabs {
    let mut pinned = PinnedTabs::new();
    pinned.toggle("/mes/dashboard", "대시보드");
    pinned.toggle("/mes/master/machine", "설비 관리");
    pinned.toggle("/mes/master/process", "공정 관리");
    pinned
}

// ---- gesture classification ----

#[test]
fn test_press_release_in_place_is_click() {
    let mut strip = TabStrip::new();

    strip.begin_drag(1);
    assert!(strip.is_dragging());
    assert_eq!(strip.release_over(1), TabGesture::Activate);
    assert!(!strip.is_dragging());
}

#[test]
fn test_press_move_release_is_drag() {
    let mut strip = TabStrip::new();

    strip.begin_drag(0);
    strip.drag_over(1);
    strip.drag_over(2);
    assert_eq!(strip.hover_index(), Some(2));
    assert_eq!(strip.release_over(2), TabGesture::Move { from: 0, to: 2 });
    assert!(!strip.is_dragging());
}

#[test]
fn test_wiggle_back_to_start_is_still_drag() {
    let mut strip = TabStrip::new();

    strip.begin_drag(0);
    strip.drag_over(1);
    strip.drag_over(0);

    // Once the pointer left the source the release can never activate
    let gesture = strip.release_over(0);
    assert_eq!(gesture, TabGesture::Move { from: 0, to: 0 });

    let mut pinned = pinned_three();
    if let TabGesture::Move { from, to } = gesture {
        assert!(!pinned.reorder(from, to), "equal indices must be a no-op");
    }
    assert_eq!(
        pinned.tabs()[0].path,
        "/mes/dashboard",
        "order must be unchanged"
    );
}

#[test]
fn test_hover_over_source_does_not_mark_moved() {
    let mut strip = TabStrip::new();

    strip.begin_drag(1);
    strip.drag_over(1);
    assert_eq!(strip.release_over(1), TabGesture::Activate);
}

#[test]
fn test_release_without_begin_is_click() {
    let mut strip = TabStrip::new();
    assert_eq!(strip.release_over(3), TabGesture::Activate);
}

#[test]
fn test_cancel_abandons_session() {
    let mut strip = TabStrip::new();

    strip.begin_drag(0);
    strip.drag_over(2);
    strip.cancel_drag();
    assert!(!strip.is_dragging());
    assert_eq!(strip.hover_index(), None);

    // Cancel with no session is harmless
    strip.cancel_drag();

    // The next release starts from a clean slate
    assert_eq!(strip.release_over(2), TabGesture::Activate);
}

#[test]
fn test_new_press_replaces_previous_session() {
    let mut strip = TabStrip::new();

    strip.begin_drag(0);
    strip.drag_over(2);
    strip.begin_drag(1);

    assert_eq!(strip.hover_index(), None);
    assert_eq!(strip.release_over(1), TabGesture::Activate);
}

// ---- applying drags to the pinned list ----

#[test]
fn test_drag_forward_and_backward() {
    let mut pinned = pinned_three();

    let mut strip = TabStrip::new();
    strip.begin_drag(0);
    strip.drag_over(2);
    if let TabGesture::Move { from, to } = strip.release_over(2) {
        assert!(pinned.reorder(from, to));
    }
    assert_eq!(
        common::entry_paths(pinned.tabs()),
        ["/mes/master/machine", "/mes/master/process", "/mes/dashboard"]
    );

    strip.begin_drag(2);
    strip.drag_over(0);
    if let TabGesture::Move { from, to } = strip.release_over(0) {
        assert!(pinned.reorder(from, to));
    }
    assert_eq!(
        common::entry_paths(pinned.tabs()),
        ["/mes/dashboard", "/mes/master/machine", "/mes/master/process"]
    );
}

#[test]
fn test_out_of_range_drop_is_ignored() {
    let mut pinned = pinned_three();
    assert!(!pinned.reorder(0, 7));
    assert!(!pinned.reorder(7, 0));
    assert_eq!(pinned.len(), 3);
}

// ---- merged row ----

#[test]
fn test_merge_skips_pages_pinned_later() {
    let menu = sample_menu();
    let mut recent = RecentPages::new();
    let mut pinned = PinnedTabs::new();

    for path in ["/mes/dashboard", "/mes/master/machine", "/mes/master/process"] {
        recent.visit(path, menu.label_for(path));
    }

    // Pinning an already-visited page moves it out of the recent region
    pinned.toggle("/mes/master/machine", "설비 관리");
    assert_eq!(
        visible_paths(&pinned, &recent),
        ["/mes/master/machine", "/mes/dashboard", "/mes/master/process"]
    );

    // Unpinning drops it back into the recent region at its old slot
    pinned.unpin("/mes/master/machine");
    assert_eq!(
        visible_paths(&pinned, &recent),
        ["/mes/dashboard", "/mes/master/machine", "/mes/master/process"]
    );
}

#[test]
fn test_merge_is_derived_fresh() {
    let mut recent = RecentPages::new();
    let mut pinned = PinnedTabs::new();
    recent.visit("/a", Some("A"));
    recent.visit("/b", Some("B"));

    assert_eq!(visible_paths(&pinned, &recent), ["/a", "/b"]);

    pinned.toggle("/b", "B");
    assert_eq!(visible_paths(&pinned, &recent), ["/b", "/a"]);

    pinned.reorder(0, 0);
    assert_eq!(visible_paths(&pinned, &recent), ["/b", "/a"]);
}

// ---- scroll intents ----

#[test]
fn test_scroll_by_accumulates() {
    let mut strip = TabStrip::new();

    strip.request_scroll_by(120.0);
    strip.request_scroll_by(-40.0);
    assert_eq!(strip.take_scroll_command(), Some(ScrollCommand::By(80.0)));
    assert_eq!(strip.take_scroll_command(), None);
}

#[test]
fn test_scroll_to_end_wins_over_pending_delta() {
    let mut strip = TabStrip::new();

    strip.request_scroll_by(120.0);
    strip.request_scroll_to_end();
    assert_eq!(strip.take_scroll_command(), Some(ScrollCommand::ToEnd));
}

#[test]
fn test_scroll_by_after_to_end_replaces_it() {
    let mut strip = TabStrip::new();

    strip.request_scroll_to_end();
    strip.request_scroll_by(60.0);
    assert_eq!(strip.take_scroll_command(), Some(ScrollCommand::By(60.0)));
}
