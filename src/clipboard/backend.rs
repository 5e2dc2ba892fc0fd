//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("System clipboard is not available")]
    SystemUnavailable,

    #[error("Failed to write to the clipboard")]
    WriteError,
}

/// Copy text to clipboard using the specified backend
///
/// `Auto` tries the system clipboard first and falls back to OSC 52.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|err| {
            log::debug!("System clipboard failed ({}), using OSC 52", err);
            osc52::copy(text)
        }),
    }
}
