//! Shared test doubles: a scripted in-memory portal API.
#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use estatelist::api::{
    DeleteOutcome, DeletePrompt, FormMethod, FormOutcome, FormStatus, GalleryImage, PortalApi, PortalError,
    PortalUser, PropertyPage, PropertySummary,
};

/// In-memory portal that records every call and answers from scripted state.
#[derive(Default)]
pub struct RecordingApi {
    pub page_fetches: AtomicUsize,
    pub user_fetches: AtomicUsize,
    pub upload_calls: AtomicUsize,
    active_uploads: AtomicUsize,
    pub max_concurrent_uploads: AtomicUsize,
    next_image_id: AtomicI64,
    pub uploaded_files: Mutex<Vec<String>>,
    /// File names whose upload should fail with a server rejection
    pub failing_uploads: Mutex<Vec<String>>,
    pub deleted_images: Mutex<Vec<i64>>,
    pub primary_calls: Mutex<Vec<i64>>,
    pub taken_usernames: Mutex<Vec<String>>,
    pub username_checks: Mutex<Vec<String>>,
    pub invitations: Mutex<Vec<String>>,
    pub deleted_objects: Mutex<Vec<String>>,
    /// Scripted reply for `delete_object`
    pub delete_outcome: Mutex<Option<DeleteOutcome>>,
    /// Scripted reply for `submit_form`; defaults to a success
    pub form_outcome: Mutex<Option<FormOutcome>>,
    pub form_submissions: Mutex<Vec<(String, Vec<(String, String)>, FormMethod)>>,
    pub users: Mutex<Vec<PortalUser>>,
    pub images: Mutex<Vec<GalleryImage>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.next_image_id.store(1, Ordering::SeqCst);
        api
    }

    pub fn fail_upload_of(&self, file_name: &str) {
        self.failing_uploads
            .lock()
            .unwrap()
            .push(file_name.to_string());
    }

    pub fn mark_taken(&self, username: &str) {
        self.taken_usernames.lock().unwrap().push(username.to_string());
    }

    pub fn script_form_outcome(&self, outcome: FormOutcome) {
        *self.form_outcome.lock().unwrap() = Some(outcome);
    }

    pub fn upload_order(&self) -> Vec<String> {
        self.uploaded_files.lock().unwrap().clone()
    }
}

#[async_trait]
impl PortalApi for RecordingApi {
    async fn fetch_page(&self) -> Result<PropertyPage, PortalError> {
        self.page_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(PropertyPage {
            property: PropertySummary {
                id: 7,
                title: "Seaview Estate".to_string(),
                description: "Two buildings by the shore".to_string(),
            },
            images: self.images.lock().unwrap().clone(),
            csrf_token: "test-token".to_string(),
        })
    }

    async fn fetch_users(&self) -> Result<Vec<PortalUser>, PortalError> {
        self.user_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().clone())
    }

    async fn upload_image(&self, file_name: &str, _mime_type: &str, _bytes: Vec<u8>) -> Result<GalleryImage, PortalError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);

        let active = self.active_uploads.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_concurrent_uploads.fetch_max(active, Ordering::SeqCst);

        // Give a would-be concurrent upload time to overlap
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        self.active_uploads.fetch_sub(1, Ordering::SeqCst);
        self.uploaded_files.lock().unwrap().push(file_name.to_string());

        if self.failing_uploads.lock().unwrap().iter().any(|f| f == file_name) {
            return Err(PortalError::Rejected("Upload failed".to_string()));
        }

        let image_id = self.next_image_id.fetch_add(1, Ordering::SeqCst);
        Ok(GalleryImage {
            image_id,
            url: format!("/media/{}", file_name),
            caption: file_name.to_string(),
            is_primary: false,
        })
    }

    async fn delete_image(&self, image_id: i64) -> Result<(), PortalError> {
        self.deleted_images.lock().unwrap().push(image_id);
        Ok(())
    }

    async fn set_primary_image(&self, image_id: i64) -> Result<(), PortalError> {
        self.primary_calls.lock().unwrap().push(image_id);
        Ok(())
    }

    async fn check_username(&self, username: &str) -> Result<bool, PortalError> {
        self.username_checks.lock().unwrap().push(username.to_string());
        Ok(self.taken_usernames.lock().unwrap().iter().any(|u| u == username))
    }

    async fn send_invitation(&self, email: &str) -> Result<String, PortalError> {
        self.invitations.lock().unwrap().push(email.to_string());
        Ok("Invitation sent".to_string())
    }

    async fn fetch_delete_prompt(&self, _trigger_url: &str) -> Result<DeletePrompt, PortalError> {
        Ok(DeletePrompt {
            html: "<p>Are you sure you want to delete <strong>this user</strong>?</p>".to_string(),
        })
    }

    async fn delete_object(&self, action_url: &str) -> Result<DeleteOutcome, PortalError> {
        self.deleted_objects.lock().unwrap().push(action_url.to_string());
        Ok(self
            .delete_outcome
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(DeleteOutcome {
                message: Some("Deleted successfully".to_string()),
                redirect_url: None,
            }))
    }

    async fn submit_form(
        &self,
        action_url: &str,
        fields: &[(String, String)],
        method: FormMethod,
    ) -> Result<FormOutcome, PortalError> {
        self.form_submissions
            .lock()
            .unwrap()
            .push((action_url.to_string(), fields.to_vec(), method));
        Ok(self.form_outcome.lock().unwrap().clone().unwrap_or(FormOutcome {
            status: FormStatus::Success,
            message: Some("ok".to_string()),
            errors: Default::default(),
        }))
    }
}
