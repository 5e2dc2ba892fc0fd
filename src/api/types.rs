use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;

/// How deep a concept explanation should go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl DetailLevel {
    pub const ALL: [DetailLevel; 3] = [
        DetailLevel::Basic,
        DetailLevel::Intermediate,
        DetailLevel::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailLevel::Basic => "Basic",
            DetailLevel::Intermediate => "Intermediate",
            DetailLevel::Advanced => "Advanced",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DetailLevel::Basic => DetailLevel::Intermediate,
            DetailLevel::Intermediate => DetailLevel::Advanced,
            DetailLevel::Advanced => DetailLevel::Basic,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DetailLevel::Basic => DetailLevel::Advanced,
            DetailLevel::Intermediate => DetailLevel::Basic,
            DetailLevel::Advanced => DetailLevel::Intermediate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainRequest {
    pub concept: String,
    pub detail_level: DetailLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeRequest {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceRequest {
    pub student_id: String,
    pub problem_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// An image file sent as multipart field `file`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub path: PathBuf,
}

impl ImageUpload {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string()
    }
}

/// One call to the tutoring service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Solve(SolveRequest),
    Explain(ExplainRequest),
    Grade(GradeRequest),
    Advise(AdviceRequest),
    AnalyzeText(AnalyzeTextRequest),
    AnalyzeImage(ImageUpload),
    Health,
}

impl ApiRequest {
    /// Path relative to the configured base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiRequest::Solve(_) => "/solve-math",
            ApiRequest::Explain(_) => "/explain-concept",
            ApiRequest::Grade(_) => "/grade-work",
            ApiRequest::Advise(_) => "/learning-advice",
            ApiRequest::AnalyzeText(_) => "/api/analyze-problem",
            ApiRequest::AnalyzeImage(_) => "/api/analyze-problem-image",
            ApiRequest::Health => "/health",
        }
    }

    /// JSON body for the request, `None` for multipart and bodiless calls
    pub fn json_body(&self) -> Option<Result<Value, serde_json::Error>> {
        match self {
            ApiRequest::Solve(body) => Some(serde_json::to_value(body)),
            ApiRequest::Explain(body) => Some(serde_json::to_value(body)),
            ApiRequest::Grade(body) => Some(serde_json::to_value(body)),
            ApiRequest::Advise(body) => Some(serde_json::to_value(body)),
            ApiRequest::AnalyzeText(body) => Some(serde_json::to_value(body)),
            ApiRequest::AnalyzeImage(_) | ApiRequest::Health => None,
        }
    }
}

/// Decoded result of a successful call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Solution(String),
    Explanation(String),
    Graded {
        grade: Option<String>,
        feedback: String,
    },
    Advice {
        advice: String,
        resources: Vec<String>,
    },
    Analysis(String),
    ImageAnalysis(String),
    Health(String),
}

impl ApiResponse {
    /// Decode a 2xx body for `request`
    ///
    /// An `error` field in the body is a failure reported by the server even
    /// though the status was successful. The analysis endpoints are the
    /// exception: an `answer` in the same body is shown instead.
    pub fn from_body(request: &ApiRequest, body: &Value) -> Result<Self, ApiError> {
        let field = |name: &str| body.get(name).and_then(text_of);
        let is_analysis = matches!(
            request,
            ApiRequest::AnalyzeText(_) | ApiRequest::AnalyzeImage(_)
        );

        if let Some(error) = field("error")
            && !(is_analysis && field("answer").is_some())
        {
            return Err(ApiError::Reported(error));
        }

        let response = match request {
            ApiRequest::Solve(_) => ApiResponse::Solution(field("solution").unwrap_or_default()),
            ApiRequest::Explain(_) => {
                ApiResponse::Explanation(field("explanation").unwrap_or_default())
            }
            ApiRequest::Grade(_) => ApiResponse::Graded {
                grade: field("grade"),
                feedback: field("feedback").unwrap_or_default(),
            },
            ApiRequest::Advise(_) => ApiResponse::Advice {
                advice: field("advice").unwrap_or_default(),
                resources: body
                    .get("resources")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().filter_map(resource_of).collect())
                    .unwrap_or_default(),
            },
            ApiRequest::AnalyzeText(_) => ApiResponse::Analysis(field("answer").ok_or_else(
                || ApiError::Reported("Failed to get an answer".to_string()),
            )?),
            ApiRequest::AnalyzeImage(_) => {
                ApiResponse::ImageAnalysis(field("answer").ok_or_else(|| {
                    ApiError::Reported("Failed to analyze the image".to_string())
                })?)
            }
            ApiRequest::Health => {
                ApiResponse::Health(field("status").unwrap_or_else(|| "unknown".to_string()))
            }
        };

        Ok(response)
    }
}

/// Displayable text of a JSON value
///
/// Strings are taken as-is, `{"content": "..."}` objects are unwrapped,
/// scalars are formatted, and anything else is pretty-printed. Null and empty
/// strings count as absent.
pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => match map.get("content") {
            Some(Value::String(content)) => Some(content.clone()),
            _ => serde_json::to_string_pretty(value).ok(),
        },
        Value::Array(_) => serde_json::to_string_pretty(value).ok(),
    }
}

/// A learning resource: a string, or an object with a title/name and url
fn resource_of(value: &Value) -> Option<String> {
    if let Value::Object(map) = value {
        let title = map
            .get("title")
            .or_else(|| map.get("name"))
            .and_then(Value::as_str);
        let url = map.get("url").and_then(Value::as_str);
        return match (title, url) {
            (Some(title), Some(url)) => Some(format!("{} ({})", title, url)),
            (Some(title), None) => Some(title.to_string()),
            (None, Some(url)) => Some(url.to_string()),
            (None, None) => text_of(value),
        };
    }
    text_of(value)
}

/// MIME type for an image path, judged by extension
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
