use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Longest plain-text response body shown verbatim as an error detail
const MAX_DETAIL_LEN: usize = 200;

/// Errors that can occur while talking to the tutoring service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx status
    #[error("Server error {status}: {detail}")]
    Server { status: u16, detail: String },

    /// 2xx status whose body carries an `error` field
    #[error("{0}")]
    Reported(String),

    /// No connection could be made
    #[error("Cannot connect to server at {url}")]
    Connect { url: String },

    /// The server did not answer in time
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Build a server error from a non-success status and the raw body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = detail_from_body(body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        ApiError::Server {
            status: status.as_u16(),
            detail,
        }
    }

    /// Text for the notification shown to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True when no response was received at all
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Connect { .. } | ApiError::Timeout { .. })
    }

    /// Short class name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Server { .. } => "server",
            ApiError::Reported(_) => "reported",
            ApiError::Connect { .. } => "connect",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Unexpected(_) => "unexpected",
        }
    }
}

/// Extract a human-readable detail from an error body
///
/// Understands `{"detail": "..."}`, validation lists of the form
/// `{"detail": [{"msg": "..."}]}`, and `{"error": "..."}`/`{"message": "..."}`.
/// Short non-HTML bodies are used as-is.
fn detail_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
        return detail_from_json(&json);
    }

    if trimmed.starts_with('<') || trimmed.len() > MAX_DETAIL_LEN {
        return None;
    }

    Some(trimmed.to_string())
}

fn detail_from_json(json: &Value) -> Option<String> {
    for key in ["detail", "error", "message"] {
        match json.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if !messages.is_empty() {
                    return Some(messages.join("; "));
                }
            }
            _ => {}
        }
    }
    None
}
