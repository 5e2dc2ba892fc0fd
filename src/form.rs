//! Form fields shared by every view
//!
//! Text inputs wrap `tui_textarea`; the detail selector and the tag list are
//! small custom widgets. Key handling for a focused field lives in
//! [`form_events`], drawing in [`form_render`].

pub mod form_events;
pub mod form_render;
mod tag_list;
mod text_field;

use crate::api::DetailLevel;

pub use form_events::{KeyOutcome, handle_field_key, handle_field_paste};
pub use tag_list::TagList;
pub use text_field::TextField;

/// Mutable access to one field of a form, in focus order
pub enum FieldMut<'a> {
    Text(&'a mut TextField),
    Detail(&'a mut DetailLevel),
    Tags(&'a mut TagList),
}

impl FieldMut<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            FieldMut::Text(field) => field.label(),
            FieldMut::Detail(_) => "Detail level",
            FieldMut::Tags(list) => list.label(),
        }
    }
}
