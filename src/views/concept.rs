use super::{Form, ValidationError};
use crate::api::{ApiRequest, DetailLevel, ExplainRequest};
use crate::form::{FieldMut, TextField};

pub struct ConceptForm {
    pub concept: TextField,
    pub detail_level: DetailLevel,
}

impl ConceptForm {
    pub fn new() -> Self {
        Self {
            concept: TextField::single_line("Concept", "e.g. derivative, prime number"),
            detail_level: DetailLevel::default(),
        }
    }
}

impl Default for ConceptForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ConceptForm {
    fn description(&self) -> &'static str {
        "Name a concept and pick how deep the explanation should go."
    }

    fn fields(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::Text(&mut self.concept),
            FieldMut::Detail(&mut self.detail_level),
        ]
    }

    fn field_count(&self) -> usize {
        2
    }

    fn build_request(&self, _focus: usize) -> Result<ApiRequest, ValidationError> {
        let concept = self
            .concept
            .value()
            .ok_or(ValidationError::Missing("a concept"))?;

        Ok(ApiRequest::Explain(ExplainRequest {
            concept,
            detail_level: self.detail_level,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_is_required() {
        let form = ConceptForm::new();
        assert_eq!(form.build_request(0), Err(ValidationError::Missing("a concept")));
    }

    #[test]
    fn test_detail_level_defaults_to_basic() {
        let mut form = ConceptForm::new();
        form.concept.insert_str("integral");

        let request = form.build_request(0).unwrap();

        assert_eq!(
            request,
            ApiRequest::Explain(ExplainRequest {
                concept: "integral".to_string(),
                detail_level: DetailLevel::Basic,
            })
        );
    }

    #[test]
    fn test_selected_detail_level_is_sent() {
        let mut form = ConceptForm::new();
        form.concept.insert_str("integral");
        form.detail_level = DetailLevel::Advanced;

        let Ok(ApiRequest::Explain(body)) = form.build_request(1) else {
            panic!("expected an explain request");
        };

        assert_eq!(body.detail_level, DetailLevel::Advanced);
    }
}
