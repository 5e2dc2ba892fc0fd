//! HTTP client for the tutoring service
//!
//! Performs exactly one request per call and classifies every failure into an
//! [`ApiError`]. There is no retry.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::error::ApiError;
use super::types::{ApiRequest, ApiResponse, ImageUpload, image_mime};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint())
    }

    /// Send `request` and decode the response
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(request);

        let builder = match request {
            ApiRequest::Health => self.client.get(&url),
            ApiRequest::AnalyzeImage(upload) => {
                self.client.post(&url).multipart(image_form(upload).await?)
            }
            _ => {
                let body = request
                    .json_body()
                    .unwrap_or(Ok(Value::Null))
                    .map_err(|e| ApiError::Unexpected(format!("failed to encode request: {}", e)))?;
                self.client.post(&url).json(&body)
            }
        };

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &text));
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Unexpected(format!("invalid response from server: {}", e)))?;

        ApiResponse::from_body(request, &body)
    }

    /// Map a reqwest failure (no usable response) onto our error classes
    fn classify(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else if error.is_connect() || error.is_request() {
            ApiError::Connect {
                url: self.base_url.clone(),
            }
        } else {
            ApiError::Unexpected(error.to_string())
        }
    }
}

async fn image_form(upload: &ImageUpload) -> Result<Form, ApiError> {
    let mime = image_mime(&upload.path)
        .ok_or_else(|| ApiError::Unexpected("only image files can be uploaded".to_string()))?;

    let bytes = tokio::fs::read(&upload.path).await.map_err(|e| {
        ApiError::Unexpected(format!("cannot read {}: {}", upload.path.display(), e))
    })?;

    let part = Part::bytes(bytes)
        .file_name(upload.file_name())
        .mime_str(mime)
        .map_err(|e| ApiError::Unexpected(e.to_string()))?;

    Ok(Form::new().part("file", part))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
