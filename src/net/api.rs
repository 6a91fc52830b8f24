//! HTTP client wrapper for the labeling platform API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page talks to the server through one `ApiClient` provided via
//! context. The client owns the base URL and a pluggable token source, so
//! bearer injection happens in exactly one place.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Two layers. `ApiError` covers transport: either a non-2xx response
//! (status + body text verbatim) or a connection/decode failure with no
//! status. The `Envelope` inside a successful response carries the
//! application-level `success` flag; callers check both, usually through
//! `api_data`/`api_message`. Nothing here retries, times out, or caches —
//! every call is a single attempt.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    AddGroupMemberRequest, CreateGroupRequest, CreateLabelerRequest, CreateTagRequest, Envelope,
    FinalTag, FinalTagsRequest, Group, GroupDetailData, GroupListData, ImageDetailData,
    ImageSummary, Labeler, LabelerGroupListData, LabelerImageDetail, LabelerImageListData,
    LabelerListData, LoginData, LoginRequest, SubmitTagsRequest, SuggestTagsData,
    SuggestTagsRequest, Tag, UpdateLabelerRequest, UpdateTagRequest, UploadImageRequest,
};

/// Base URL all endpoint paths are appended to.
pub const API_BASE: &str = "/api/v1";

/// A 2xx response with a JSON-decodable body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiSuccess<T> {
    pub data: T,
    pub status: u16,
    pub status_text: String,
}

/// Transport-level failure of a single request attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; the body text is carried verbatim.
    #[error("HTTP {status} {status_text}: {body}")]
    Http { status: u16, status_text: String, body: String },
    /// Connection failure or undecodable body; no HTTP status available.
    #[error("{0}")]
    Transport(String),
}

pub type ApiResult<T> = Result<ApiSuccess<T>, ApiError>;

impl ApiError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// Best-effort human-readable description for inline banners.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http { status, status_text, body } => {
                let text = extract_error_message(body);
                if text.is_empty() {
                    format!("HTTP {status} {status_text}")
                } else {
                    text
                }
            }
            ApiError::Transport(message) => message.clone(),
        }
    }
}

/// Pull a displayable message out of an error body.
///
/// The server is inconsistent here: some routes return plain text, some a
/// JSON object with a `message` or `error` field, and some a bare JSON
/// string. All three shapes are accepted, falling back to the raw text.
pub fn extract_error_message(raw: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str)
                && !text.is_empty()
            {
                return text.to_owned();
            }
        }
        if let Some(text) = value.as_str() {
            return text.to_owned();
        }
    }
    raw.trim().to_owned()
}

/// Collapse both failure layers of an enveloped response into the payload.
///
/// # Errors
///
/// Returns a displayable message on transport or application failure.
pub fn api_data<T>(result: ApiResult<Envelope<T>>) -> Result<T, String> {
    match result {
        Ok(success) => success.data.into_data(),
        Err(err) => Err(err.message()),
    }
}

/// Collapse both failure layers of an enveloped response into its message.
///
/// # Errors
///
/// Returns a displayable message on transport or application failure.
pub fn api_message<T>(result: ApiResult<Envelope<T>>) -> Result<String, String> {
    match result {
        Ok(success) => success.data.into_message(),
        Err(err) => Err(err.message()),
    }
}

/// Headers attached to every request. The Authorization header is only
/// present when a token exists; an anonymous request carries none.
fn request_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

#[derive(Clone, Copy)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// HTTP client bound to one base URL and one token source.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token_source: Arc<dyn Fn() -> Option<String> + Send + Sync>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        token_source: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self { base_url: base_url.into(), token_source: Arc::new(token_source) }
    }

    /// Current bearer token, if the session has one.
    pub fn token(&self) -> Option<String> {
        (self.token_source)()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // =============================================================
    // Generic verbs
    // =============================================================

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    /// POST without a body, for trigger-style endpoints.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(HttpMethod::Post, path, None).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Transport(e.to_string()))?;
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(HttpMethod::Delete, path, None).await
    }

    #[cfg(feature = "hydrate")]
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        for (name, value) in request_headers(self.token().as_deref()) {
            builder = builder.header(name, &value);
        }
        let request = match body {
            Some(json) => builder.body(json.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, status_text, body });
        }
        match response.json::<T>().await {
            Ok(data) => Ok(ApiSuccess { data, status, status_text }),
            Err(e) => Err(ApiError::Transport(e.to_string())),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send<T: DeserializeOwned>(
        &self,
        _method: HttpMethod,
        _path: &str,
        _body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        Err(ApiError::Transport("not available on server".to_owned()))
    }

    // =============================================================
    // Auth
    // =============================================================

    /// Authenticate via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure; a wrong
    /// username/password/role combination surfaces as HTTP 403.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<Envelope<LoginData>> {
        self.post("/login", request).await
    }

    // =============================================================
    // Admin: labelers
    // =============================================================

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn list_labelers(&self) -> ApiResult<Envelope<LabelerListData>> {
        self.get("/admin/labeler").await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn create_labeler(
        &self,
        request: &CreateLabelerRequest,
    ) -> ApiResult<Envelope<Labeler>> {
        self.post("/admin/labeler", request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn update_labeler(
        &self,
        labeler_id: i64,
        request: &UpdateLabelerRequest,
    ) -> ApiResult<Envelope<Labeler>> {
        self.put(&labeler_endpoint(labeler_id), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn delete_labeler(&self, labeler_id: i64) -> ApiResult<Envelope<()>> {
        self.delete(&labeler_endpoint(labeler_id)).await
    }

    // =============================================================
    // Admin: groups and membership
    // =============================================================

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn list_groups(&self) -> ApiResult<Envelope<GroupListData>> {
        self.get("/admin/groups").await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn create_group(&self, request: &CreateGroupRequest) -> ApiResult<Envelope<Group>> {
        self.post("/admin/groups", request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn delete_group(&self, group_id: i64) -> ApiResult<Envelope<()>> {
        self.delete(&group_endpoint(group_id)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn group_detail(&self, group_id: i64) -> ApiResult<Envelope<GroupDetailData>> {
        self.get(&group_endpoint(group_id)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn add_group_member(
        &self,
        group_id: i64,
        labeler_id: i64,
    ) -> ApiResult<Envelope<()>> {
        self.post(&group_members_endpoint(group_id), &AddGroupMemberRequest { labeler_id }).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn remove_group_member(
        &self,
        group_id: i64,
        labeler_id: i64,
    ) -> ApiResult<Envelope<()>> {
        self.delete(&group_member_endpoint(group_id, labeler_id)).await
    }

    // =============================================================
    // Admin: tags
    // =============================================================

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn group_tags(&self, group_id: i64) -> ApiResult<Envelope<Vec<Tag>>> {
        self.get(&group_tags_endpoint(group_id)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn create_tag(&self, request: &CreateTagRequest) -> ApiResult<Envelope<Tag>> {
        self.post("/admin/tag", request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn update_tag(
        &self,
        tag_id: i64,
        request: &UpdateTagRequest,
    ) -> ApiResult<Envelope<Tag>> {
        self.put(&tag_endpoint(tag_id), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn delete_tag(&self, tag_id: i64) -> ApiResult<Envelope<()>> {
        self.delete(&tag_endpoint(tag_id)).await
    }

    // =============================================================
    // Admin: images, statistics, final tags
    // =============================================================

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn upload_image(
        &self,
        request: &UploadImageRequest,
    ) -> ApiResult<Envelope<ImageSummary>> {
        self.post("/admin/image", request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn image_detail(
        &self,
        group_id: i64,
        image_id: i64,
    ) -> ApiResult<Envelope<ImageDetailData>> {
        self.get(&group_image_endpoint(group_id, image_id)).await
    }

    /// Recompute an image's final tags from labeler consensus.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn auto_generate_final_tags(
        &self,
        image_id: i64,
    ) -> ApiResult<Envelope<Vec<FinalTag>>> {
        self.post_empty(&auto_generate_endpoint(image_id)).await
    }

    /// Replace an image's final tags with an admin-chosen set.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn override_final_tags(
        &self,
        image_id: i64,
        tag_ids: Vec<i64>,
    ) -> ApiResult<Envelope<Vec<FinalTag>>> {
        self.put(&final_tags_endpoint(image_id), &FinalTagsRequest { tag_ids }).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn export_bulk(&self) -> ApiResult<Envelope<serde_json::Value>> {
        self.get("/admin/export/bulk").await
    }

    // =============================================================
    // Labeler
    // =============================================================

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn labeler_groups(&self) -> ApiResult<Envelope<LabelerGroupListData>> {
        self.get("/labeler/groups").await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn labeler_group_images(
        &self,
        group_id: i64,
    ) -> ApiResult<Envelope<LabelerImageListData>> {
        self.get(&labeler_group_images_endpoint(group_id)).await
    }

    /// Fetch an image with its group tags and the labeler's current tags.
    /// This route returns its payload bare, without the standard envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn labeler_image_detail(
        &self,
        group_id: i64,
        image_id: i64,
    ) -> ApiResult<LabelerImageDetail> {
        self.get(&labeler_image_endpoint(group_id, image_id)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn submit_image_tags(
        &self,
        group_id: i64,
        image_id: i64,
        tag_ids: Vec<i64>,
    ) -> ApiResult<Envelope<()>> {
        self.put(&labeler_image_tags_endpoint(group_id, image_id), &SubmitTagsRequest { tag_ids })
            .await
    }

    /// Ask the server for tag suggestions, excluding already-selected tags.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport-level failure.
    pub async fn suggest_tags(
        &self,
        image_id: i64,
        ignored_tag_ids: Vec<i64>,
    ) -> ApiResult<Envelope<SuggestTagsData>> {
        self.post(&suggest_tags_endpoint(image_id), &SuggestTagsRequest { ignored_tag_ids }).await
    }
}

// =============================================================
// Endpoint paths
// =============================================================

fn labeler_endpoint(labeler_id: i64) -> String {
    format!("/admin/labeler/{labeler_id}")
}

fn group_endpoint(group_id: i64) -> String {
    format!("/admin/groups/{group_id}")
}

fn group_members_endpoint(group_id: i64) -> String {
    format!("/admin/groups/{group_id}/labelers")
}

fn group_member_endpoint(group_id: i64, labeler_id: i64) -> String {
    format!("/admin/groups/{group_id}/labelers/{labeler_id}")
}

fn tag_endpoint(tag_id: i64) -> String {
    format!("/admin/tag/{tag_id}")
}

fn group_tags_endpoint(group_id: i64) -> String {
    format!("/admin/tag/group/{group_id}")
}

fn group_image_endpoint(group_id: i64, image_id: i64) -> String {
    format!("/admin/groups/{group_id}/image/{image_id}")
}

fn final_tags_endpoint(image_id: i64) -> String {
    format!("/admin/image/{image_id}/final-tags")
}

fn auto_generate_endpoint(image_id: i64) -> String {
    format!("/admin/image/{image_id}/final-tags/auto-generate")
}

fn labeler_group_images_endpoint(group_id: i64) -> String {
    format!("/labeler/groups/{group_id}/images")
}

fn labeler_image_endpoint(group_id: i64, image_id: i64) -> String {
    format!("/labeler/groups/{group_id}/images/{image_id}")
}

fn labeler_image_tags_endpoint(group_id: i64, image_id: i64) -> String {
    format!("/labeler/groups/{group_id}/images/{image_id}/tags")
}

fn suggest_tags_endpoint(image_id: i64) -> String {
    format!("/labeler/images/{image_id}/suggest_tags")
}
