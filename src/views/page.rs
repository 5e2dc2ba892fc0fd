use ratatui::crossterm::event::KeyEvent;

use super::{Form, ValidationError, View, response_markdown};
use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::form::{self, FieldMut, KeyOutcome};
use crate::scroll::ScrollState;
use crate::tabs::Tab;

/// The active view and the state it shares with every other view
pub struct Page {
    pub view: View,
    pub focus: usize,
    pub loading: bool,
    /// Id of the in-flight request, if any
    pub request_id: Option<u64>,
    /// Markdown of the last answer
    pub result: Option<String>,
    pub scroll: ScrollState,
}

impl Page {
    pub fn new(tab: Tab) -> Self {
        Self {
            view: View::new(tab),
            focus: 0,
            loading: false,
            request_id: None,
            result: None,
            scroll: ScrollState::new(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.view.tab()
    }

    pub fn form(&self) -> &dyn Form {
        self.view.as_form()
    }

    pub fn focus_next(&mut self) {
        let count = self.form().field_count();
        self.focus = (self.focus + 1) % count;
    }

    pub fn focus_previous(&mut self) {
        let count = self.form().field_count();
        self.focus = (self.focus + count - 1) % count;
    }

    pub fn focused_field(&mut self) -> Option<FieldMut<'_>> {
        let focus = self.focus;
        self.view.as_form_mut().fields().into_iter().nth(focus)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match self.focused_field() {
            Some(field) => form::handle_field_key(field, key),
            None => KeyOutcome::Ignored,
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Some(field) = self.focused_field() {
            form::handle_field_paste(field, text);
        }
    }

    pub fn build_request(&self) -> Result<ApiRequest, ValidationError> {
        self.form().build_request(self.focus)
    }

    pub fn start_request(&mut self, request_id: u64) {
        self.loading = true;
        self.request_id = Some(request_id);
    }

    /// Whether `request_id` is the request this page is waiting for
    pub fn is_waiting_for(&self, request_id: u64) -> bool {
        self.request_id == Some(request_id)
    }

    pub fn apply_response(&mut self, response: ApiResponse) {
        self.finish_request();
        self.result = Some(response_markdown(response));
        self.scroll.reset();
    }

    pub fn apply_error(&mut self, err: &ApiError) {
        self.finish_request();
        if self.form().clears_result_on_error(err) {
            self.result = None;
            self.scroll.reset();
        }
    }

    pub fn result_markdown(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Stop waiting without an answer, keeping the previous result
    pub fn finish_request(&mut self) {
        self.loading = false;
        self.request_id = None;
    }
}
