use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;

/// Ctrl+Y: copy the current answer, returns true if the key was handled
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_result(app);
        return true;
    }

    false
}

fn copy_result(app: &mut App) {
    let Some(result) = app.page.result_markdown().filter(|r| !r.trim().is_empty()) else {
        app.notification.show_warning("Nothing to copy yet");
        return;
    };

    match copy_to_clipboard(result, app.clipboard_backend) {
        Ok(()) => app.notification.show("Copied result!"),
        Err(err) => {
            log::warn!("Copy failed: {}", err);
            app.notification.show_error(&err.to_string());
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
