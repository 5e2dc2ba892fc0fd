//! Clipboard support
//!
//! Copies the current answer either through the system clipboard or with an
//! OSC 52 escape sequence, which also works over SSH.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
