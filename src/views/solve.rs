use super::{Form, ValidationError};
use crate::api::{ApiRequest, SolveRequest};
use crate::form::{FieldMut, TextField};

pub struct SolveForm {
    pub question: TextField,
    pub context: TextField,
}

impl SolveForm {
    pub fn new() -> Self {
        Self {
            question: TextField::multi_line("Problem", "Type a math problem, e.g. solve 2x + 3 = 11"),
            context: TextField::single_line("Context (optional)", "What you already tried or know"),
        }
    }
}

impl Default for SolveForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SolveForm {
    fn description(&self) -> &'static str {
        "Enter a problem and get a step-by-step solution."
    }

    fn fields(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::Text(&mut self.question),
            FieldMut::Text(&mut self.context),
        ]
    }

    fn field_count(&self) -> usize {
        2
    }

    fn build_request(&self, _focus: usize) -> Result<ApiRequest, ValidationError> {
        let question = self
            .question
            .value()
            .ok_or(ValidationError::Missing("a math problem"))?;

        Ok(ApiRequest::Solve(SolveRequest {
            question,
            context: self.context.value(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_required() {
        let form = SolveForm::new();
        assert_eq!(
            form.build_request(0),
            Err(ValidationError::Missing("a math problem"))
        );
    }

    #[test]
    fn test_context_is_optional() {
        let mut form = SolveForm::new();
        form.question.insert_str("2x + 3 = 11");

        let request = form.build_request(0).unwrap();

        assert_eq!(
            request,
            ApiRequest::Solve(SolveRequest {
                question: "2x + 3 = 11".to_string(),
                context: None,
            })
        );
    }

    #[test]
    fn test_context_is_sent_when_given() {
        let mut form = SolveForm::new();
        form.question.insert_str("x^2 = 4");
        form.context.insert_str(" only positive roots ");

        let Ok(ApiRequest::Solve(body)) = form.build_request(1) else {
            panic!("expected a solve request");
        };

        assert_eq!(body.context.as_deref(), Some("only positive roots"));
    }
}
