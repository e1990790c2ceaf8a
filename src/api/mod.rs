//! Portal API abstraction layer.
//!
//! This module defines the interface the rest of the application uses to talk
//! to the portal backend, along with the wire data types and error handling.
//! The HTTP implementation lives in [`http`]; tests substitute their own
//! implementations of [`PortalApi`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod http;

pub use http::HttpPortalApi;

/// Common error types for portal operations.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}

/// Summary of the property whose page this session manages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// One entry of the property's image gallery.
///
/// The server is the sole source of truth for these; the client only
/// reflects the last successful mutation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image_id: i64,
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// The page bootstrap payload: property summary, gallery and the CSRF token
/// required on every mutating request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyPage {
    pub property: PropertySummary,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    pub csrf_token: String,
}

/// Lifecycle state of a company user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Invited,
    Active,
}

/// One row of the company user list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
}

/// Envelope of the user list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserListPage {
    #[serde(default)]
    pub users: Vec<PortalUser>,
}

/// Raw body of an image upload reply.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(default)]
    pub image_id: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a structured form submission.
#[derive(Clone, Debug, Deserialize)]
pub struct FormOutcome {
    pub status: FormStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Success,
    Error,
}

/// How a form submission travels on the wire. `Patch` is sent as a POST
/// carrying the backend's `_method=PATCH` override marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMethod {
    Post,
    Patch,
}

/// Server-rendered confirmation fragment for a pending deletion.
#[derive(Clone, Debug, Deserialize)]
pub struct DeletePrompt {
    pub html: String,
}

impl DeletePrompt {
    /// Strip markup from the fragment for terminal display.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.html.len());
        let mut in_tag = false;
        for c in self.html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => {
                    in_tag = false;
                    // Tag boundaries act as whitespace so adjacent text
                    // nodes don't run together.
                    if !out.ends_with(' ') && !out.is_empty() {
                        out.push(' ');
                    }
                }
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Reply to a confirmed deletion.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeleteOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Reply to a username availability check.
#[derive(Clone, Debug, Deserialize)]
pub struct UsernameCheck {
    pub exists: bool,
}

/// Interface to the portal backend.
///
/// All mutations require the CSRF token delivered by [`fetch_page`];
/// implementations are responsible for attaching it.
///
/// [`fetch_page`]: PortalApi::fetch_page
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Load the property page bootstrap (property, gallery, CSRF token).
    async fn fetch_page(&self) -> Result<PropertyPage, PortalError>;

    /// Load the company user list.
    async fn fetch_users(&self) -> Result<Vec<PortalUser>, PortalError>;

    /// Upload one image as a multipart POST. Returns the gallery entry the
    /// server created, or `Rejected` for a `status != success` body.
    async fn upload_image(&self, file_name: &str, mime_type: &str, bytes: Vec<u8>) -> Result<GalleryImage, PortalError>;

    /// Delete a gallery image.
    async fn delete_image(&self, image_id: i64) -> Result<(), PortalError>;

    /// Mark a gallery image as the property's primary image.
    async fn set_primary_image(&self, image_id: i64) -> Result<(), PortalError>;

    /// Check whether a username is already taken.
    async fn check_username(&self, username: &str) -> Result<bool, PortalError>;

    /// Send a company invitation. Returns the server's success message, or
    /// `Rejected` carrying the server's error text.
    async fn send_invitation(&self, email: &str) -> Result<String, PortalError>;

    /// Fetch the confirmation fragment for a delete trigger URL.
    async fn fetch_delete_prompt(&self, trigger_url: &str) -> Result<DeletePrompt, PortalError>;

    /// Issue the confirmed DELETE for an object.
    async fn delete_object(&self, action_url: &str) -> Result<DeleteOutcome, PortalError>;

    /// Submit a structured form and return the parsed outcome.
    async fn submit_form(
        &self,
        action_url: &str,
        fields: &[(String, String)],
        method: FormMethod,
    ) -> Result<FormOutcome, PortalError>;
}
