//! Tutoring service API
//!
//! Request/response shapes for the remote service, the HTTP client that
//! performs a single call, and the background worker that keeps those calls
//! off the UI thread.

mod client;
mod error;
mod types;
pub mod worker;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    AdviceRequest, AnalyzeTextRequest, ApiRequest, ApiResponse, DetailLevel, ExplainRequest,
    GradeRequest, ImageUpload, SolveRequest, image_mime,
};
