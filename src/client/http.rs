//! HTTP client for the fellowship portal backend
//!
//! Two endpoints matter here: `POST /api/applications` creates the core
//! record, and `POST /api/applications/cv-upload` attaches the CV to it as
//! multipart. Timeouts are whatever reqwest defaults to.

use super::payload::{CreatedApplication, Envelope, SubmissionPayload, UploadedCv};
use super::traits::PortalApi;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::multipart;
use std::path::Path;

/// Client for the portal's application endpoints
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new portal client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn create_application(&self, payload: &SubmissionPayload) -> Result<CreatedApplication> {
        tracing::info!(email = %payload.email, "submitting application");

        let response = self
            .http
            .post(self.url("/api/applications"))
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach the portal: {e}"))?;

        let status = response.status();
        let envelope: Envelope<CreatedApplication> = response
            .json()
            .await
            .map_err(|e| anyhow!("Unreadable portal response ({status}): {e}"))?;

        if !status.is_success() || !envelope.success {
            let reason = envelope
                .failure_reason()
                .unwrap_or("Failed to submit application")
                .to_string();
            return Err(anyhow!(reason));
        }

        envelope
            .data
            .ok_or_else(|| anyhow!("Portal response is missing the created application"))
    }

    async fn upload_cv(&self, application_id: &str, cv_path: &Path) -> Result<UploadedCv> {
        tracing::info!(application_id, path = %cv_path.display(), "uploading CV");

        let bytes = tokio::fs::read(cv_path)
            .await
            .with_context(|| format!("Failed to read CV file {}", cv_path.display()))?;
        let file_name = cv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cv.pdf".to_string());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = multipart::Form::new()
            .text("applicationId", application_id.to_string())
            .part("cvFile", part);

        let response = self
            .http
            .post(self.url("/api/applications/cv-upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach the portal: {e}"))?;

        let status = response.status();
        let envelope: Envelope<UploadedCv> = response
            .json()
            .await
            .map_err(|e| anyhow!("Unreadable upload response ({status}): {e}"))?;

        if !status.is_success() || !envelope.success {
            let reason = envelope
                .failure_reason()
                .unwrap_or("Failed to upload CV file")
                .to_string();
            return Err(anyhow!(reason));
        }

        envelope
            .data
            .ok_or_else(|| anyhow!("Upload response is missing the file URL"))
    }
}
