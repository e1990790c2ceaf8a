//! Portal service: the data layer between the UI and the API.
//!
//! The service is cheap to clone and safe to hand to background tasks. It
//! owns the API behind the [`PortalApi`] trait so the UI and tests never
//! depend on a concrete transport, logs every operation, and hosts the
//! sequential upload batch runner.

use std::sync::Arc;

use crate::api::{
    DeleteOutcome, DeletePrompt, FormMethod, FormOutcome, GalleryImage, PortalApi, PortalError, PortalUser,
    PropertyPage,
};
use crate::logger::Logger;
use crate::upload::UploadCandidate;

/// Progress events emitted while an upload batch runs.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    Uploaded(GalleryImage),
    Failed { file: String, message: String },
}

/// Totals for a finished upload batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct PortalService {
    api: Arc<dyn PortalApi>,
    logger: Logger,
}

impl PortalService {
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            api,
            logger: Logger::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    /// Load the property page bootstrap (property, gallery, CSRF token).
    pub async fn load_page(&self) -> Result<PropertyPage, PortalError> {
        let page = self.api.fetch_page().await?;
        self.logger.log(format!(
            "Page: Loaded property '{}' with {} images",
            page.property.title,
            page.images.len()
        ));
        Ok(page)
    }

    /// Load the company user list.
    pub async fn load_users(&self) -> Result<Vec<PortalUser>, PortalError> {
        let users = self.api.fetch_users().await?;
        self.logger.log(format!("Users: Loaded {} users", users.len()));
        Ok(users)
    }

    /// Upload validated candidates strictly one at a time, awaiting each
    /// response before starting the next. A failed file is reported through
    /// the event callback and the batch moves on; failures never abort the
    /// remaining files.
    pub async fn upload_batch<F>(&self, candidates: Vec<UploadCandidate>, mut on_event: F) -> UploadReport
    where
        F: FnMut(UploadEvent),
    {
        let mut report = UploadReport::default();

        for candidate in candidates {
            match self.upload_one(&candidate).await {
                Ok(image) => {
                    self.logger
                        .log(format!("Upload: '{}' stored as image {}", candidate.file_name, image.image_id));
                    report.uploaded += 1;
                    on_event(UploadEvent::Uploaded(image));
                }
                Err(e) => {
                    self.logger
                        .log(format!("Upload: '{}' failed: {}", candidate.file_name, e));
                    report.failed += 1;
                    on_event(UploadEvent::Failed {
                        file: candidate.file_name.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        report
    }

    async fn upload_one(&self, candidate: &UploadCandidate) -> Result<GalleryImage, PortalError> {
        let bytes = tokio::fs::read(&candidate.path)
            .await
            .map_err(|e| PortalError::Rejected(e.to_string()))?;
        self.api
            .upload_image(&candidate.file_name, &candidate.mime_type, bytes)
            .await
    }

    pub async fn delete_image(&self, image_id: i64) -> Result<(), PortalError> {
        self.api.delete_image(image_id).await?;
        self.logger.log(format!("Gallery: Deleted image {}", image_id));
        Ok(())
    }

    /// Mark an image as primary. The caller follows a success with a full
    /// page refetch; the single-primary invariant stays server-enforced.
    pub async fn set_primary_image(&self, image_id: i64) -> Result<(), PortalError> {
        self.api.set_primary_image(image_id).await?;
        self.logger.log(format!("Gallery: Image {} set as primary", image_id));
        Ok(())
    }

    pub async fn check_username(&self, username: &str) -> Result<bool, PortalError> {
        let exists = self.api.check_username(username).await?;
        self.logger.log(format!(
            "Registration: Username '{}' is {}",
            username,
            if exists { "taken" } else { "available" }
        ));
        Ok(exists)
    }

    pub async fn send_invitation(&self, email: &str) -> Result<String, PortalError> {
        let message = self.api.send_invitation(email).await?;
        self.logger.log(format!("Invitation: Sent to '{}'", email));
        Ok(message)
    }

    pub async fn fetch_delete_prompt(&self, trigger_url: &str) -> Result<DeletePrompt, PortalError> {
        self.api.fetch_delete_prompt(trigger_url).await
    }

    pub async fn delete_object(&self, action_url: &str) -> Result<DeleteOutcome, PortalError> {
        let outcome = self.api.delete_object(action_url).await?;
        self.logger.log(format!("Delete: Confirmed for {}", action_url));
        Ok(outcome)
    }

    pub async fn submit_form(
        &self,
        action_url: &str,
        fields: &[(String, String)],
        method: FormMethod,
    ) -> Result<FormOutcome, PortalError> {
        let outcome = self.api.submit_form(action_url, fields, method).await?;
        self.logger.log(format!(
            "Form: {} submit to {} -> {:?}",
            match method {
                FormMethod::Post => "POST",
                FormMethod::Patch => "PATCH",
            },
            action_url,
            outcome.status
        ));
        Ok(outcome)
    }
}
