use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::FieldMut;

/// What a key press did to the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The field consumed the key
    Handled,
    /// The key asks for the form to be submitted
    Submit,
    /// The field has no use for the key
    Ignored,
}

/// Handle a key for the focused field
///
/// Enter submits from single-line fields and the detail selector, adds the
/// pending entry of a tag list (submitting when there is none) and starts a
/// new line in multi-line fields.
pub fn handle_field_key(field: FieldMut<'_>, key: KeyEvent) -> KeyOutcome {
    let plain_enter = key.code == KeyCode::Enter
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match field {
        FieldMut::Text(text) => {
            if key.code == KeyCode::Enter && !plain_enter {
                return KeyOutcome::Ignored;
            }
            if plain_enter {
                if text.is_multiline() {
                    text.insert_newline();
                    return KeyOutcome::Handled;
                }
                return KeyOutcome::Submit;
            }
            text.input(key);
            KeyOutcome::Handled
        }
        FieldMut::Detail(level) => match key.code {
            KeyCode::Enter => KeyOutcome::Submit,
            KeyCode::Left | KeyCode::Char('h') => {
                *level = level.previous();
                KeyOutcome::Handled
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                *level = level.next();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        },
        FieldMut::Tags(list) => {
            if key.code == KeyCode::Enter && !plain_enter {
                return KeyOutcome::Ignored;
            }
            if plain_enter {
                if list.pending.is_blank() {
                    return KeyOutcome::Submit;
                }
                list.commit_pending();
                return KeyOutcome::Handled;
            }
            if key.code == KeyCode::Backspace && list.pending.text().is_empty() {
                list.remove_last();
                return KeyOutcome::Handled;
            }
            list.pending.input(key);
            KeyOutcome::Handled
        }
    }
}

/// Insert pasted text into the focused field
pub fn handle_field_paste(field: FieldMut<'_>, text: &str) {
    match field {
        FieldMut::Text(field) => field.insert_str(text),
        FieldMut::Tags(list) => list.pending.insert_str(text),
        FieldMut::Detail(_) => {}
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
