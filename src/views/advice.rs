use super::{Form, ValidationError};
use crate::api::{AdviceRequest, ApiRequest};
use crate::form::{FieldMut, TagList, TextField};

pub struct AdviceForm {
    pub student_id: TextField,
    pub problem_areas: TagList,
}

impl AdviceForm {
    pub fn new() -> Self {
        Self {
            student_id: TextField::single_line("Student ID", "e.g. s-1024"),
            problem_areas: TagList::new("Problem areas", "e.g. fractions, then Enter"),
        }
    }
}

impl Default for AdviceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AdviceForm {
    fn description(&self) -> &'static str {
        "List the topics you struggle with to get a study plan."
    }

    fn fields(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::Text(&mut self.student_id),
            FieldMut::Tags(&mut self.problem_areas),
        ]
    }

    fn field_count(&self) -> usize {
        2
    }

    fn build_request(&self, _focus: usize) -> Result<ApiRequest, ValidationError> {
        let student_id = self
            .student_id
            .value()
            .ok_or(ValidationError::Missing("a student ID"))?;

        let problem_areas = self.problem_areas.values();
        if problem_areas.is_empty() {
            return Err(ValidationError::NoProblemAreas);
        }

        Ok(ApiRequest::Advise(AdviceRequest {
            student_id,
            problem_areas,
        }))
    }
}

/// Advice text followed by a list of resources
pub(super) fn format_result(advice: &str, resources: &[String]) -> String {
    if resources.is_empty() {
        return advice.to_string();
    }

    let mut out = advice.trim_end().to_string();
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str("### Resources\n");
    for resource in resources {
        out.push_str("- ");
        out.push_str(resource);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_is_required() {
        let form = AdviceForm::new();
        assert_eq!(
            form.build_request(0),
            Err(ValidationError::Missing("a student ID"))
        );
    }

    #[test]
    fn test_at_least_one_area_is_required() {
        let mut form = AdviceForm::new();
        form.student_id.insert_str("s-1");
        assert_eq!(form.build_request(0), Err(ValidationError::NoProblemAreas));
    }

    #[test]
    fn test_pending_area_counts() {
        let mut form = AdviceForm::new();
        form.student_id.insert_str("s-1");
        form.problem_areas.add_tag("fractions");
        form.problem_areas.pending.insert_str("decimals");

        let request = form.build_request(1).unwrap();

        assert_eq!(
            request,
            ApiRequest::Advise(AdviceRequest {
                student_id: "s-1".to_string(),
                problem_areas: vec!["fractions".to_string(), "decimals".to_string()],
            })
        );
    }

    #[test]
    fn test_format_result_lists_resources() {
        let out = format_result("Practice daily.", &["Khan Academy".to_string()]);
        assert_eq!(out, "Practice daily.\n\n### Resources\n- Khan Academy\n");
    }

    #[test]
    fn test_format_result_without_resources() {
        assert_eq!(format_result("Practice daily.", &[]), "Practice daily.");
    }
}
