//! Application state, event handling and rendering
//!
//! [`App`] owns the active [`Page`](crate::views::Page) and everything drawn
//! around it: the tab bar, notifications and the help popup. Network calls go
//! through the worker channel; answers are picked up by
//! [`App::poll_responses`] once per frame.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, ServerStatus};
