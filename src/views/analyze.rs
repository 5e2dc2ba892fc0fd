use std::path::PathBuf;

use super::{Form, ValidationError};
use crate::api::{AnalyzeTextRequest, ApiError, ApiRequest, ImageUpload, image_mime};
use crate::form::{FieldMut, TextField};

/// Submitting while this field is focused uploads the image
const IMAGE_FIELD: usize = 1;

pub struct AnalyzeForm {
    pub text: TextField,
    pub image_path: TextField,
}

impl AnalyzeForm {
    pub fn new() -> Self {
        Self {
            text: TextField::multi_line("Problem", "Type or paste a math problem"),
            image_path: TextField::single_line("Image file", "Path to a photo of the problem"),
        }
    }

    fn image_request(&self) -> Result<ApiRequest, ValidationError> {
        let raw = self
            .image_path
            .value()
            .ok_or(ValidationError::Missing("an image path"))?;
        let path = expand_path(&raw);

        if image_mime(&path).is_none() {
            return Err(ValidationError::NotAnImage);
        }
        if !path.is_file() {
            return Err(ValidationError::FileNotFound(path.display().to_string()));
        }

        Ok(ApiRequest::AnalyzeImage(ImageUpload { path }))
    }
}

impl Default for AnalyzeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AnalyzeForm {
    fn description(&self) -> &'static str {
        "Describe a problem in text, or give the path of a photo of it."
    }

    fn fields(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::Text(&mut self.text),
            FieldMut::Text(&mut self.image_path),
        ]
    }

    fn field_count(&self) -> usize {
        2
    }

    /// Uploads the image when its field is focused, or when it is the only
    /// input given; sends the text otherwise
    fn build_request(&self, focus: usize) -> Result<ApiRequest, ValidationError> {
        if focus == IMAGE_FIELD || (self.text.is_blank() && !self.image_path.is_blank()) {
            return self.image_request();
        }

        let text = self
            .text
            .value()
            .ok_or(ValidationError::Missing("a math problem"))?;
        Ok(ApiRequest::AnalyzeText(AnalyzeTextRequest { text }))
    }

    /// Only a failure the server reported replaces the answer; transport
    /// errors leave it on screen
    fn clears_result_on_error(&self, err: &ApiError) -> bool {
        matches!(err, ApiError::Reported(_))
    }
}

/// Strip the quotes terminals add to dropped files and expand `~/`
fn expand_path(raw: &str) -> PathBuf {
    let unquoted = raw.trim_matches(|c| c == '\'' || c == '"');
    if let Some(rest) = unquoted.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(unquoted)
}
