//! Tests for help_state

use super::*;

#[test]
fn test_new_help_state() {
    let state = HelpPopupState::new();
    assert!(!state.visible);
    assert_eq!(state.scroll.offset, 0);
}

#[test]
fn test_toggle_opens_and_closes() {
    let mut state = HelpPopupState::new();

    state.toggle();
    assert!(state.visible);

    state.toggle();
    assert!(!state.visible);
}

#[test]
fn test_close_resets_scroll() {
    let mut state = HelpPopupState::new();
    state.visible = true;
    state.scroll.update_bounds(50, 10);
    state.scroll.scroll_down(5);

    state.close();

    assert!(!state.visible);
    assert_eq!(state.scroll.offset, 0);
}
