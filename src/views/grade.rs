use super::{Form, ValidationError};
use crate::api::{ApiRequest, GradeRequest};
use crate::form::{FieldMut, TextField};

pub struct GradeForm {
    pub question: TextField,
    pub answer: TextField,
    pub student_id: TextField,
}

impl GradeForm {
    pub fn new() -> Self {
        Self {
            question: TextField::multi_line("Question", "The homework question"),
            answer: TextField::multi_line("Answer", "Your worked answer"),
            student_id: TextField::single_line("Student ID (optional)", "e.g. s-1024"),
        }
    }
}

impl Default for GradeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for GradeForm {
    fn description(&self) -> &'static str {
        "Paste a question and your answer to have it graded."
    }

    fn fields(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::Text(&mut self.question),
            FieldMut::Text(&mut self.answer),
            FieldMut::Text(&mut self.student_id),
        ]
    }

    fn field_count(&self) -> usize {
        3
    }

    fn build_request(&self, _focus: usize) -> Result<ApiRequest, ValidationError> {
        let question = self
            .question
            .value()
            .ok_or(ValidationError::Missing("the question"))?;
        let answer = self
            .answer
            .value()
            .ok_or(ValidationError::Missing("your answer"))?;

        Ok(ApiRequest::Grade(GradeRequest {
            question,
            answer,
            student_id: self.student_id.value(),
        }))
    }
}

/// Grade line followed by the feedback
pub(super) fn format_result(grade: Option<&str>, feedback: &str) -> String {
    match grade {
        Some(grade) if feedback.trim().is_empty() => format!("**Grade:** {}", grade),
        Some(grade) => format!("**Grade:** {}\n\n{}", grade, feedback),
        None => feedback.to_string(),
    }
}
