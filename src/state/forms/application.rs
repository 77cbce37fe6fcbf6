//! The in-progress fellowship application form

use super::field::FormField;
use super::registry::{self, FieldSpec, Requirement};
use std::path::PathBuf;

/// Complete set of entered values for one in-progress application.
///
/// Created empty when the wizard mounts, mutated by key events, and
/// discarded after a successful submission. The review step renders from
/// this struct directly so the summary can never diverge from what gets
/// submitted.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    // Personal and contact information
    pub title: FormField,
    pub first_name: FormField,
    pub middle_name: FormField,
    pub last_name: FormField,
    pub gender: FormField,
    pub email: FormField,
    pub nationality: FormField,
    pub country_of_residence: FormField,
    pub phone: FormField,
    pub address: FormField,

    // Career and educational background
    pub workplace: FormField,
    pub position: FormField,
    pub education_level: FormField,
    pub other_education: FormField,

    // Fellowship context and contribution
    pub professional_context: FormField,
    pub other_context: FormField,
    pub expected_contribution: FormField,
    pub other_contribution: FormField,

    // Project and funding
    pub project_type: FormField,
    pub project_area: FormField,
    pub other_project_area: FormField,
    pub project_summary: FormField,
    pub project_motivation: FormField,
    pub estimated_budget: FormField,
    pub funding_sources: FormField,
    pub funding_secured: FormField,
    pub funding_proof: FormField,
    pub funding_plan: FormField,
    pub sustainability_plan: FormField,
    pub cv_file: FormField,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self {
            title: FormField::choice("title", "Title", registry::TITLE_OPTIONS),
            first_name: FormField::text("firstName", "First Name", false),
            middle_name: FormField::text("middleName", "Middle Name", false),
            last_name: FormField::text("lastName", "Last Name", false),
            gender: FormField::choice("gender", "Gender", registry::GENDER_OPTIONS),
            email: FormField::text("email", "Email Address", false),
            nationality: FormField::text("nationality", "Nationality", false),
            country_of_residence: FormField::text(
                "countryOfResidence",
                "Country of Residence",
                false,
            ),
            phone: FormField::text("phone", "Phone Number", false),
            address: FormField::text("address", "Address", true),

            workplace: FormField::text("workplace", "Workplace", false),
            position: FormField::text("position", "Position", false),
            education_level: FormField::choice(
                "educationLevel",
                "Education Level",
                registry::EDUCATION_OPTIONS,
            ),
            other_education: FormField::text("otherEducation", "Other Education Level", false),

            professional_context: FormField::choice(
                "professionalContext",
                "Professional Context",
                registry::CONTEXT_OPTIONS,
            ),
            other_context: FormField::text("otherContext", "Other Professional Context", false),
            expected_contribution: FormField::choice(
                "expectedContribution",
                "Expected Contribution",
                registry::CONTRIBUTION_OPTIONS,
            ),
            other_contribution: FormField::text(
                "otherContribution",
                "Other Expected Contribution",
                false,
            ),

            project_type: FormField::choice(
                "projectType",
                "Project Type",
                registry::PROJECT_TYPE_OPTIONS,
            ),
            project_area: FormField::choice(
                "projectArea",
                "Project Area",
                registry::PROJECT_AREA_OPTIONS,
            ),
            other_project_area: FormField::text("otherProjectArea", "Other Project Area", false),
            project_summary: FormField::text("projectSummary", "Project Summary", true),
            project_motivation: FormField::text("projectMotivation", "Project Motivation", true),
            estimated_budget: FormField::text("estimatedBudget", "Estimated Budget", false),
            funding_sources: FormField::text("fundingSources", "Funding Sources", false),
            funding_secured: FormField::choice(
                "fundingSecured",
                "Funding Secured",
                registry::FUNDING_SECURED_OPTIONS,
            ),
            funding_proof: FormField::file("fundingProof", "Proof of Funding"),
            funding_plan: FormField::file("fundingPlan", "Funding Plan"),
            sustainability_plan: FormField::text("sustainabilityPlan", "Sustainability Plan", true),
            cv_file: FormField::file("cvFile", "CV/Resume"),
        }
    }

    /// Look up a field by its registry name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields().into_iter().find(|f| f.name == name)
    }

    /// Look up a field by its registry name, mutably
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields_mut().into_iter().find(|f| f.name == name)
    }

    /// Whether a conditionally-required field is currently in play,
    /// i.e. its trigger field holds the triggering value. Unconditional
    /// fields are always active.
    pub fn is_field_active(&self, spec: &FieldSpec) -> bool {
        match spec.requirement {
            Requirement::Always | Requirement::Optional => true,
            Requirement::IfEquals { field, value } => {
                self.field(field).is_some_and(|f| f.as_text() == value)
            }
        }
    }

    /// Fields of a data-entry step that should be shown and navigated,
    /// in declaration order. Conditional fields whose trigger does not
    /// match are skipped.
    pub fn active_fields(&self, step: u8) -> Vec<&FormField> {
        let Some(def) = registry::step_definition(step) else {
            return Vec::new();
        };
        def.fields
            .iter()
            .filter(|spec| self.is_field_active(spec))
            .filter_map(|spec| self.field(spec.name))
            .collect()
    }

    /// Path of the attached CV, if the applicant provided one
    pub fn cv_file_path(&self) -> Option<PathBuf> {
        if self.cv_file.is_present() {
            Some(PathBuf::from(self.cv_file.as_text()))
        } else {
            None
        }
    }

    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.title,
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.gender,
            &self.email,
            &self.nationality,
            &self.country_of_residence,
            &self.phone,
            &self.address,
            &self.workplace,
            &self.position,
            &self.education_level,
            &self.other_education,
            &self.professional_context,
            &self.other_context,
            &self.expected_contribution,
            &self.other_contribution,
            &self.project_type,
            &self.project_area,
            &self.other_project_area,
            &self.project_summary,
            &self.project_motivation,
            &self.estimated_budget,
            &self.funding_sources,
            &self.funding_secured,
            &self.funding_proof,
            &self.funding_plan,
            &self.sustainability_plan,
            &self.cv_file,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.title,
            &mut self.first_name,
            &mut self.middle_name,
            &mut self.last_name,
            &mut self.gender,
            &mut self.email,
            &mut self.nationality,
            &mut self.country_of_residence,
            &mut self.phone,
            &mut self.address,
            &mut self.workplace,
            &mut self.position,
            &mut self.education_level,
            &mut self.other_education,
            &mut self.professional_context,
            &mut self.other_context,
            &mut self.expected_contribution,
            &mut self.other_contribution,
            &mut self.project_type,
            &mut self.project_area,
            &mut self.other_project_area,
            &mut self.project_summary,
            &mut self.project_motivation,
            &mut self.estimated_budget,
            &mut self.funding_sources,
            &mut self.funding_secured,
            &mut self.funding_proof,
            &mut self.funding_plan,
            &mut self.sustainability_plan,
            &mut self.cv_file,
        ]
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::registry::data_entry_steps;

    #[test]
    fn test_every_registry_field_resolves() {
        let form = ApplicationForm::new();
        for def in data_entry_steps() {
            for spec in def.fields {
                let field = form
                    .field(spec.name)
                    .unwrap_or_else(|| panic!("missing field {}", spec.name));
                assert_eq!(field.label, spec.label, "label drift for {}", spec.name);
            }
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ApplicationForm::new();
        assert!(form.fields().iter().all(|f| !f.is_present()));
    }

    #[test]
    fn test_field_mut_edits_value() {
        let mut form = ApplicationForm::new();
        form.field_mut("firstName").unwrap().set("Amina".to_string());
        assert_eq!(form.first_name.as_text(), "Amina");
    }

    #[test]
    fn test_conditional_field_hidden_until_triggered() {
        let mut form = ApplicationForm::new();
        let names: Vec<&str> = form.active_fields(2).iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["workplace", "position", "educationLevel"]);

        form.education_level.set("Other".to_string());
        let names: Vec<&str> = form.active_fields(2).iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["workplace", "position", "educationLevel", "otherEducation"]
        );
    }

    #[test]
    fn test_funding_file_fields_swap_on_choice() {
        let mut form = ApplicationForm::new();
        form.funding_secured.set("Yes".to_string());
        let names: Vec<&str> = form.active_fields(4).iter().map(|f| f.name).collect();
        assert!(names.contains(&"fundingProof"));
        assert!(!names.contains(&"fundingPlan"));

        form.funding_secured.set("No".to_string());
        let names: Vec<&str> = form.active_fields(4).iter().map(|f| f.name).collect();
        assert!(names.contains(&"fundingPlan"));
        assert!(!names.contains(&"fundingProof"));
    }

    #[test]
    fn test_review_step_has_no_active_fields() {
        let form = ApplicationForm::new();
        assert!(form.active_fields(5).is_empty());
    }

    #[test]
    fn test_cv_file_path() {
        let mut form = ApplicationForm::new();
        assert!(form.cv_file_path().is_none());
        form.cv_file.set("/tmp/cv.pdf".to_string());
        assert_eq!(form.cv_file_path(), Some(PathBuf::from("/tmp/cv.pdf")));
    }
}
