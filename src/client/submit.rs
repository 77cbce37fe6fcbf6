//! Submission orchestration
//!
//! Revalidates the whole form, creates the core application record, then
//! uploads the CV when one is attached. If the create call fails nothing is
//! uploaded. If the upload fails after the record was created, the record
//! stays (the backend has no rollback) and the failure is carried on the
//! receipt instead of being swallowed.

use super::payload::SubmissionPayload;
use super::traits::PortalApi;
use crate::state::{validate_all, ApplicationForm, CvUploadStatus, SubmissionReceipt};
use thiserror::Error;

/// Why a submission attempt did not produce a receipt
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The pre-submission gate found missing required fields
    #[error("Please complete the following required fields before submitting: {}", .0.join(", "))]
    Validation(Vec<&'static str>),
    /// The create request failed; no upload was attempted
    #[error("{0}")]
    Submission(#[source] anyhow::Error),
}

/// Submit the finished form.
///
/// All required fields across all steps are revalidated first, guarding
/// against state mutation that bypassed the per-step gates.
pub async fn submit(
    api: &dyn PortalApi,
    form: &ApplicationForm,
) -> Result<SubmissionReceipt, SubmitError> {
    let check = validate_all(form);
    if !check.is_valid {
        return Err(SubmitError::Validation(check.missing_field_labels));
    }

    let payload = SubmissionPayload::from_form(form);
    let created = api
        .create_application(&payload)
        .await
        .map_err(SubmitError::Submission)?;
    tracing::info!(id = %created.id, "application created");

    let cv_upload = match form.cv_file_path() {
        None => CvUploadStatus::NotAttached,
        Some(path) => match api.upload_cv(&created.id, &path).await {
            Ok(uploaded) => CvUploadStatus::Uploaded { url: uploaded.url },
            Err(e) => {
                // The record exists; surface the gap rather than hiding it
                tracing::warn!(id = %created.id, "CV upload failed after create: {e}");
                CvUploadStatus::Failed {
                    reason: e.to_string(),
                }
            }
        },
    };

    Ok(SubmissionReceipt {
        application_id: created.id,
        cv_upload,
    })
}
