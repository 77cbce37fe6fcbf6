//! Trait abstraction for the portal client to enable mocking in tests

use super::payload::{CreatedApplication, SubmissionPayload, UploadedCv};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for portal API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Create the core application record
    async fn create_application(&self, payload: &SubmissionPayload) -> Result<CreatedApplication>;

    /// Upload the applicant's CV, tagged with the created record's id
    async fn upload_cv(&self, application_id: &str, cv_path: &Path) -> Result<UploadedCv>;
}
