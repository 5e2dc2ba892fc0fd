//! The five feature views
//!
//! Each view is a form: it owns its fields, validates them and builds one
//! [`ApiRequest`]. [`Page`] wraps the active view with the state every view
//! shares (focus, loading flag, result, scroll) and is rebuilt on every tab
//! switch.

mod advice;
mod analyze;
mod concept;
mod grade;
mod page;
mod solve;

use thiserror::Error;

use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::form::FieldMut;
use crate::tabs::Tab;

pub use advice::AdviceForm;
pub use analyze::AnalyzeForm;
pub use concept::ConceptForm;
pub use grade::GradeForm;
pub use page::Page;
pub use solve::SolveForm;

/// Local input problems, caught before anything is sent
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter {0}")]
    Missing(&'static str),

    #[error("Please add at least one problem area")]
    NoProblemAreas,

    #[error("Only image files can be uploaded")]
    NotAnImage,

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Behaviour shared by every view's form
pub trait Form {
    /// One-line summary shown before the first answer
    fn description(&self) -> &'static str;

    /// Fields in focus order
    fn fields(&mut self) -> Vec<FieldMut<'_>>;

    fn field_count(&self) -> usize;

    /// Validate the fields and build the request to send
    ///
    /// `focus` is the focused field index; views with more than one submit
    /// action use it to pick one.
    fn build_request(&self, focus: usize) -> Result<ApiRequest, ValidationError>;

    /// Whether `err` also removes the previous answer
    fn clears_result_on_error(&self, _err: &ApiError) -> bool {
        false
    }
}

pub enum View {
    Solve(SolveForm),
    Concept(ConceptForm),
    Grade(GradeForm),
    Advice(AdviceForm),
    Analyze(AnalyzeForm),
}

impl View {
    /// A fresh view for `tab` with empty fields
    pub fn new(tab: Tab) -> Self {
        match tab {
            Tab::Solve => View::Solve(SolveForm::new()),
            Tab::Concept => View::Concept(ConceptForm::new()),
            Tab::Grade => View::Grade(GradeForm::new()),
            Tab::Advice => View::Advice(AdviceForm::new()),
            Tab::Analyze => View::Analyze(AnalyzeForm::new()),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            View::Solve(_) => Tab::Solve,
            View::Concept(_) => Tab::Concept,
            View::Grade(_) => Tab::Grade,
            View::Advice(_) => Tab::Advice,
            View::Analyze(_) => Tab::Analyze,
        }
    }

    pub fn as_form(&self) -> &dyn Form {
        match self {
            View::Solve(form) => form,
            View::Concept(form) => form,
            View::Grade(form) => form,
            View::Advice(form) => form,
            View::Analyze(form) => form,
        }
    }

    pub fn as_form_mut(&mut self) -> &mut dyn Form {
        match self {
            View::Solve(form) => form,
            View::Concept(form) => form,
            View::Grade(form) => form,
            View::Advice(form) => form,
            View::Analyze(form) => form,
        }
    }
}

/// Markdown shown in the result pane for a successful response
pub fn response_markdown(response: ApiResponse) -> String {
    match response {
        ApiResponse::Solution(text)
        | ApiResponse::Explanation(text)
        | ApiResponse::Analysis(text)
        | ApiResponse::ImageAnalysis(text) => text,
        ApiResponse::Graded { grade, feedback } => grade::format_result(grade.as_deref(), &feedback),
        ApiResponse::Advice { advice, resources } => advice::format_result(&advice, &resources),
        ApiResponse::Health(status) => format!("Server status: {}", status),
    }
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod views_tests;
