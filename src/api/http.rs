//! HTTP implementation of the portal API.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::StatusCode;

use super::{
    DeleteOutcome, DeletePrompt, FormMethod, FormOutcome, GalleryImage, PortalApi, PortalError, PortalUser,
    PropertyPage, UploadResponse, UserListPage, UsernameCheck,
};
use crate::config::EndpointsConfig;

/// HTTP client for a portal backend.
///
/// The CSRF token is captured from the page bootstrap and attached to every
/// mutating request, mirroring the hidden `csrfmiddlewaretoken` field the
/// server renders into its pages.
pub struct HttpPortalApi {
    client: reqwest::Client,
    endpoints: EndpointsConfig,
    base_url: String,
    csrf_token: RwLock<Option<String>>,
}

impl HttpPortalApi {
    pub fn new(base_url: String, endpoints: EndpointsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
            base_url,
            csrf_token: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn csrf_token(&self) -> Result<String, PortalError> {
        self.csrf_token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .ok_or_else(|| PortalError::Auth("no CSRF token - page not loaded yet".to_string()))
    }

    fn remember_csrf_token(&self, token: &str) {
        if let Ok(mut guard) = self.csrf_token.write() {
            *guard = Some(token.to_string());
        }
    }

    /// Map a non-success status to a portal error, preferring the JSON
    /// `message`/`error` field the backend puts in its failure bodies.
    async fn error_from_response(response: reqwest::Response) -> PortalError {
        let status = response.status();
        let body_message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PortalError::Auth(body_message.unwrap_or_else(|| status.to_string()))
            }
            StatusCode::NOT_FOUND => PortalError::NotFound(body_message.unwrap_or_else(|| status.to_string())),
            _ => PortalError::Rejected(body_message.unwrap_or_else(|| format!("HTTP error! status: {}", status))),
        }
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, PortalError> {
        response
            .json::<T>()
            .await
            .map_err(|e| PortalError::InvalidPayload(e.to_string()))
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn fetch_page(&self) -> Result<PropertyPage, PortalError> {
        let path = EndpointsConfig::resolve(&self.endpoints.page_path, self.endpoints.property_id);
        let response = self
            .client
            .get(self.url(&path))
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let page: PropertyPage = Self::parse_json(response).await?;
        self.remember_csrf_token(&page.csrf_token);
        Ok(page)
    }

    async fn fetch_users(&self) -> Result<Vec<PortalUser>, PortalError> {
        let response = self
            .client
            .get(self.url(&self.endpoints.users_path))
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let page: UserListPage = Self::parse_json(response).await?;
        Ok(page.users)
    }

    async fn upload_image(&self, file_name: &str, mime_type: &str, bytes: Vec<u8>) -> Result<GalleryImage, PortalError> {
        let token = self.csrf_token()?;
        let path = EndpointsConfig::resolve(&self.endpoints.upload_path, self.endpoints.property_id);

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| PortalError::InvalidPayload(e.to_string()))?;
        let form = multipart::Form::new()
            .part("image", part)
            .text("image_upload", "1")
            .text("csrfmiddlewaretoken", token.clone());

        let response = self
            .client
            .post(self.url(&path))
            .header("X-CSRFToken", token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: UploadResponse = Self::parse_json(response).await?;
        if body.status != "success" {
            return Err(PortalError::Rejected(
                body.message.unwrap_or_else(|| "Upload failed".to_string()),
            ));
        }

        match (body.image_id, body.url) {
            (Some(image_id), Some(url)) => Ok(GalleryImage {
                image_id,
                url,
                caption: body.caption.unwrap_or_default(),
                is_primary: false,
            }),
            _ => Err(PortalError::InvalidPayload(
                "upload reply missing image_id or url".to_string(),
            )),
        }
    }

    async fn delete_image(&self, image_id: i64) -> Result<(), PortalError> {
        let token = self.csrf_token()?;
        let path = EndpointsConfig::resolve(&self.endpoints.image_delete_path, image_id);

        let response = self
            .client
            .delete(self.url(&path))
            .header("X-CSRFToken", token)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    async fn set_primary_image(&self, image_id: i64) -> Result<(), PortalError> {
        let token = self.csrf_token()?;
        let path = EndpointsConfig::resolve(&self.endpoints.set_primary_path, image_id);

        let response = self
            .client
            .post(self.url(&path))
            .header("X-CSRFToken", token)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    async fn check_username(&self, username: &str) -> Result<bool, PortalError> {
        let response = self
            .client
            .get(self.url(&self.endpoints.check_username_path))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let check: UsernameCheck = Self::parse_json(response).await?;
        Ok(check.exists)
    }

    async fn send_invitation(&self, email: &str) -> Result<String, PortalError> {
        let token = self.csrf_token()?;
        let fields = [("email", email)];

        let response = self
            .client
            .post(self.url(&self.endpoints.invite_path))
            .header("X-CSRFToken", token)
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&fields)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: serde_json::Value = Self::parse_json(response).await?;
        Ok(body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Invitation sent")
            .to_string())
    }

    async fn fetch_delete_prompt(&self, trigger_url: &str) -> Result<DeletePrompt, PortalError> {
        let response = self
            .client
            .get(self.url(trigger_url))
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Self::parse_json(response).await
    }

    async fn delete_object(&self, action_url: &str) -> Result<DeleteOutcome, PortalError> {
        let token = self.csrf_token()?;

        let response = self
            .client
            .delete(self.url(action_url))
            .header("X-CSRFToken", token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Self::parse_json(response).await
    }

    async fn submit_form(
        &self,
        action_url: &str,
        fields: &[(String, String)],
        method: FormMethod,
    ) -> Result<FormOutcome, PortalError> {
        let token = self.csrf_token()?;

        let mut fields = fields.to_vec();
        if method == FormMethod::Patch {
            fields.push(("_method".to_string(), "PATCH".to_string()));
        }

        let response = self
            .client
            .post(self.url(action_url))
            .header("X-CSRFToken", token)
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&fields)
            .send()
            .await
            .map_err(|e| PortalError::Network(e.to_string()))?;

        // Validation failures come back as 400 with a structured body the
        // caller renders field by field, so parse before rejecting.
        if response.status() == StatusCode::BAD_REQUEST || response.status().is_success() {
            return Self::parse_json(response).await;
        }

        Err(Self::error_from_response(response).await)
    }
}
