//! Tests for clipboard_events

use super::*;
use crate::config::ClipboardBackend;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

#[test]
fn test_ctrl_y_copies_result() {
    let (mut app, _channels) = test_app();
    app.clipboard_backend = ClipboardBackend::Osc52;
    app.page.result = Some("x = 2".to_string());

    let handled = handle_clipboard_key(&mut app, key_with_mods(KeyCode::Char('y'), KeyModifiers::CONTROL));

    assert!(handled);
    let notification = app.notification.peek().unwrap();
    assert_eq!(notification.message, "Copied result!");
}

#[test]
fn test_ctrl_y_without_result_warns() {
    let (mut app, _channels) = test_app();

    handle_clipboard_key(&mut app, key_with_mods(KeyCode::Char('y'), KeyModifiers::CONTROL));

    assert_eq!(app.notification.peek().unwrap().message, "Nothing to copy yet");
}

#[test]
fn test_plain_y_is_not_handled() {
    let (mut app, _channels) = test_app();

    assert!(!handle_clipboard_key(&mut app, key(KeyCode::Char('y'))));
    assert!(app.notification.peek().is_none());
}
