//! Step validation
//!
//! Pure functions over the registry and the current form values. Computed
//! fresh on every check; nothing here is persisted.

use super::application::ApplicationForm;
use super::registry::{self, Requirement, StepDefinition};

/// Outcome of validating one step (or the whole form before submission)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Labels of missing required fields, in declaration order
    pub missing_field_labels: Vec<&'static str>,
}

impl ValidationResult {
    fn from_missing(missing: Vec<&'static str>) -> Self {
        Self {
            is_valid: missing.is_empty(),
            missing_field_labels: missing,
        }
    }
}

/// Validate a single data-entry step against the current form values.
///
/// A required field passes when it is present (non-empty text, a made
/// selection, or an attached file). Conditionally required fields are
/// evaluated dynamically against the live form. The review step (and any
/// out-of-range step) has nothing to check and validates trivially.
pub fn validate_step(form: &ApplicationForm, step: u8) -> ValidationResult {
    match registry::step_definition(step) {
        Some(def) => ValidationResult::from_missing(collect_missing(form, def)),
        None => ValidationResult::from_missing(Vec::new()),
    }
}

/// Validate every data-entry step, for the pre-submission gate on the
/// review step. Guards against state mutation that bypassed the per-step
/// checks.
pub fn validate_all(form: &ApplicationForm) -> ValidationResult {
    let missing = registry::data_entry_steps()
        .iter()
        .flat_map(|def| collect_missing(form, def))
        .collect();
    ValidationResult::from_missing(missing)
}

fn collect_missing(form: &ApplicationForm, def: &StepDefinition) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for spec in def.fields {
        let required = match spec.requirement {
            Requirement::Always => true,
            Requirement::Optional => false,
            Requirement::IfEquals { field, value } => {
                form.field(field).is_some_and(|f| f.as_text() == value)
            }
        };
        if required && !form.field(spec.name).is_some_and(|f| f.is_present()) {
            missing.push(spec.label);
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_step_1(form: &mut ApplicationForm) {
        form.title.set("Dr.".to_string());
        form.first_name.set("Amina".to_string());
        form.last_name.set("Uwase".to_string());
        form.gender.set("Female".to_string());
        form.email.set("amina@example.org".to_string());
        form.nationality.set("Rwandan".to_string());
        form.country_of_residence.set("Rwanda".to_string());
        form.phone.set("+250788123456".to_string());
        form.address.set("KG 7 Ave, Kigali".to_string());
    }

    fn fill_step_2(form: &mut ApplicationForm) {
        form.workplace.set("University of Rwanda".to_string());
        form.position.set("Lecturer".to_string());
        form.education_level.set("Master's Degree".to_string());
    }

    fn fill_step_3(form: &mut ApplicationForm) {
        form.professional_context
            .set("Working in a healthcare facility".to_string());
        form.expected_contribution.set("Technical Support".to_string());
    }

    fn fill_step_4(form: &mut ApplicationForm) {
        form.project_type.set("Independent Project".to_string());
        form.project_area
            .set("Public Health Surveillance".to_string());
        form.project_summary.set("Sentinel site expansion".to_string());
        form.project_motivation.set("Coverage gaps".to_string());
        form.estimated_budget.set("25000".to_string());
        form.funding_sources.set("Institutional grant".to_string());
        form.funding_secured.set("Yes".to_string());
        form.funding_proof.set("/tmp/award-letter.pdf".to_string());
        form.sustainability_plan.set("Ministry handover".to_string());
    }

    fn filled_form() -> ApplicationForm {
        let mut form = ApplicationForm::new();
        fill_step_1(&mut form);
        fill_step_2(&mut form);
        fill_step_3(&mut form);
        fill_step_4(&mut form);
        form
    }

    #[test]
    fn test_empty_form_fails_step_1_in_declaration_order() {
        let form = ApplicationForm::new();
        let result = validate_step(&form, 1);
        assert!(!result.is_valid);
        assert_eq!(
            result.missing_field_labels,
            vec![
                "Title",
                "First Name",
                "Last Name",
                "Gender",
                "Email Address",
                "Nationality",
                "Country of Residence",
                "Phone Number",
                "Address",
            ]
        );
    }

    #[test]
    fn test_optional_middle_name_not_reported() {
        let mut form = ApplicationForm::new();
        fill_step_1(&mut form);
        let result = validate_step(&form, 1);
        assert!(result.is_valid);
        assert!(result.missing_field_labels.is_empty());
    }

    #[test]
    fn test_each_filled_step_validates() {
        let form = filled_form();
        for step in 1..=4 {
            let result = validate_step(&form, step);
            assert!(result.is_valid, "step {step}: {:?}", result.missing_field_labels);
        }
    }

    #[test]
    fn test_validator_is_idempotent() {
        let mut form = ApplicationForm::new();
        fill_step_2(&mut form);
        form.position.clear();
        let first = validate_step(&form, 2);
        let second = validate_step(&form, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_other_education_required_when_level_is_other() {
        // Scenario A
        let mut form = ApplicationForm::new();
        fill_step_2(&mut form);
        form.education_level.set("Other".to_string());
        let result = validate_step(&form, 2);
        assert!(!result.is_valid);
        assert_eq!(result.missing_field_labels, vec!["Other Education Level"]);

        form.other_education.set("Fellowship diploma".to_string());
        assert!(validate_step(&form, 2).is_valid);
    }

    #[test]
    fn test_funding_proof_required_when_secured() {
        // Scenario B
        let mut form = ApplicationForm::new();
        fill_step_4(&mut form);
        form.funding_proof.clear();
        let result = validate_step(&form, 4);
        assert!(!result.is_valid);
        assert_eq!(result.missing_field_labels, vec!["Proof of Funding"]);
    }

    #[test]
    fn test_funding_plan_required_when_not_secured() {
        let mut form = ApplicationForm::new();
        fill_step_4(&mut form);
        form.funding_secured.set("No".to_string());
        let result = validate_step(&form, 4);
        assert!(!result.is_valid);
        assert_eq!(result.missing_field_labels, vec!["Funding Plan"]);

        form.funding_plan.set("/tmp/funding-plan.pdf".to_string());
        assert!(validate_step(&form, 4).is_valid);
    }

    #[test]
    fn test_conditional_ignored_when_trigger_differs() {
        let mut form = ApplicationForm::new();
        fill_step_3(&mut form);
        // Neither choice is "Other", so neither free-text field is required
        assert!(validate_step(&form, 3).is_valid);
    }

    #[test]
    fn test_review_step_validates_trivially() {
        let form = ApplicationForm::new();
        assert!(validate_step(&form, 5).is_valid);
    }

    #[test]
    fn test_validate_all_spans_every_step() {
        let mut form = filled_form();
        form.workplace.clear();
        form.project_summary.clear();
        let result = validate_all(&form);
        assert!(!result.is_valid);
        assert_eq!(
            result.missing_field_labels,
            vec!["Workplace", "Project Summary"]
        );
    }

    #[test]
    fn test_validate_all_passes_on_complete_form() {
        let form = filled_form();
        assert!(validate_all(&form).is_valid);
    }
}
