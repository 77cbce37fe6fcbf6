//! Wire types for the portal API
//!
//! The payload is a flattened snapshot of the form taken at submit time.
//! Empty optional fields are nulled out, except `middleName` which the
//! backend stores as an empty string. File fields do not serialize into the
//! JSON body; the CV travels in a follow-up multipart request.

use crate::state::ApplicationForm;
use serde::{Deserialize, Serialize};

/// JSON body for `POST /api/applications`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub title: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub nationality: String,
    pub country_of_residence: String,
    pub phone: String,
    pub address: String,
    pub workplace: String,
    pub position: String,
    pub education_level: String,
    pub other_education: Option<String>,
    pub professional_context: String,
    pub other_context: Option<String>,
    pub expected_contribution: String,
    pub other_contribution: Option<String>,
    pub project_type: String,
    pub project_area: String,
    pub other_project_area: Option<String>,
    pub project_summary: String,
    pub project_motivation: String,
    pub estimated_budget: String,
    pub funding_sources: String,
    pub funding_secured: String,
    pub sustainability_plan: String,
    pub status: String,
}

impl SubmissionPayload {
    /// Snapshot the form. Immutable after construction; built once per
    /// submission attempt.
    pub fn from_form(form: &ApplicationForm) -> Self {
        Self {
            title: form.title.as_text().to_string(),
            first_name: form.first_name.as_text().to_string(),
            middle_name: form.middle_name.as_text().to_string(),
            last_name: form.last_name.as_text().to_string(),
            gender: form.gender.as_text().to_string(),
            email: form.email.as_text().to_string(),
            nationality: form.nationality.as_text().to_string(),
            country_of_residence: form.country_of_residence.as_text().to_string(),
            phone: form.phone.as_text().to_string(),
            address: form.address.as_text().to_string(),
            workplace: form.workplace.as_text().to_string(),
            position: form.position.as_text().to_string(),
            education_level: form.education_level.as_text().to_string(),
            other_education: optional(form.other_education.as_text()),
            professional_context: form.professional_context.as_text().to_string(),
            other_context: optional(form.other_context.as_text()),
            expected_contribution: form.expected_contribution.as_text().to_string(),
            other_contribution: optional(form.other_contribution.as_text()),
            project_type: form.project_type.as_text().to_string(),
            project_area: form.project_area.as_text().to_string(),
            other_project_area: optional(form.other_project_area.as_text()),
            project_summary: form.project_summary.as_text().to_string(),
            project_motivation: form.project_motivation.as_text().to_string(),
            estimated_budget: form.estimated_budget.as_text().to_string(),
            funding_sources: form.funding_sources.as_text().to_string(),
            funding_secured: form.funding_secured.as_text().to_string(),
            sustainability_plan: form.sustainability_plan.as_text().to_string(),
            status: "pending".to_string(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Response envelope the portal wraps every payload in
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
}

impl<T> Envelope<T> {
    /// Best server-provided failure description, mirroring the backend's
    /// inconsistent use of `details`, `error`, and `message`
    pub fn failure_reason(&self) -> Option<&str> {
        self.details
            .as_deref()
            .or(self.error.as_deref())
            .or(self.message.as_deref())
    }
}

/// The created application record, as the portal reports it
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedApplication {
    pub id: String,
}

/// Result of the follow-up CV upload, carried in the envelope's `data`.
/// The endpoint also echoes `applicationId`, which we already know.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedCv {
    #[serde(rename = "cvFileUrl")]
    pub url: String,
}
