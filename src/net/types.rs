//! Wire DTOs for the labeling platform API.
//!
//! DESIGN
//! ======
//! Every payload crossing the HTTP boundary is declared here as a serde type
//! so malformed server responses fail at the decode step instead of leaking
//! missing fields into page state. Request bodies get explicit structs too,
//! keeping endpoint call sites schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role, fixed at login time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Labeler,
}

impl Role {
    /// Wire/display form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Labeler => "labeler",
        }
    }
}

/// The authenticated account as held in memory and local storage.
///
/// Assembled client-side from the login response plus the submitted
/// username and role; the server only returns `{user_id, token}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-issued account identifier.
    pub id: i64,
    /// Login name, also shown in the navbar greeting.
    pub username: String,
    /// Account role.
    pub role: Role,
}

/// Standard response envelope wrapping almost every endpoint payload.
///
/// The one exception is the labeler image-detail route, which returns its
/// payload bare.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application-level success flag, independent of the HTTP status.
    pub success: bool,
    /// Human-readable outcome description.
    #[serde(default)]
    pub message: String,
    /// Payload, present on success for endpoints that return one.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Extract the payload, treating `success=false` or missing data as an
    /// application failure carrying the server's message.
    ///
    /// # Errors
    ///
    /// Returns the envelope message (or a generic fallback) on failure.
    pub fn into_data(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("response had no data".to_owned()),
            (false, _) => Err(non_empty_message(self.message)),
        }
    }

    /// Reduce the envelope to its outcome message, for mutations whose
    /// payload is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns the envelope message (or a generic fallback) on failure.
    pub fn into_message(self) -> Result<String, String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(non_empty_message(self.message))
        }
    }
}

fn non_empty_message(message: String) -> String {
    if message.is_empty() {
        "request failed".to_owned()
    } else {
        message
    }
}

// =============================================================
// Auth
// =============================================================

/// Body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Identifier of the authenticated account.
    pub user_id: i64,
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

// =============================================================
// Admin: labelers and groups
// =============================================================

/// A labeler account as listed for administrators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labeler {
    pub id: i64,
    pub username: String,
    /// Groups this labeler belongs to.
    #[serde(default)]
    pub group_ids: Vec<i64>,
}

/// A labeling group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Payload of `GET /admin/labeler`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerListData {
    pub labelers: Vec<Labeler>,
    pub total: i64,
}

/// Payload of `GET /admin/groups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupListData {
    pub groups: Vec<Group>,
    pub total: i64,
}

/// Body for `POST /admin/labeler`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLabelerRequest {
    pub username: String,
    pub password: String,
    /// Initial group memberships, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<i64>>,
}

/// Body for `PUT /admin/labeler/{id}`; omitted fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLabelerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<i64>>,
}

/// Body for `POST /admin/groups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `POST /admin/groups/{id}/labelers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddGroupMemberRequest {
    pub labeler_id: i64,
}

// =============================================================
// Admin: tags and images
// =============================================================

/// A tag, scoped to one group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Body for `POST /admin/tag`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    pub description: Option<String>,
    pub group_id: i64,
}

/// Body for `PUT /admin/tag/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTagRequest {
    pub name: String,
    pub description: Option<String>,
}

/// An uploaded image as listed in the admin group detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub id: i64,
    pub filename: String,
    pub filetype: String,
    pub uploaded_at: String,
}

/// Body for `POST /admin/image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImageRequest {
    pub filename: String,
    /// MIME subtype or full MIME type, as picked from the file.
    pub filetype: String,
    /// Raw image bytes, base64-encoded without a data-URL prefix.
    pub base64_data: String,
    pub group_id: i64,
}

/// Payload of `GET /admin/groups/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDetailData {
    pub group: Group,
    pub labelers: Vec<Labeler>,
    pub tags: Vec<Tag>,
    pub images: Vec<ImageSummary>,
}

// =============================================================
// Admin: image detail, statistics, final tags
// =============================================================

/// Full image record with pixel data, admin view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    pub filename: String,
    pub filetype: String,
    /// Raw image bytes, base64-encoded without a data-URL prefix.
    pub base64_data: String,
    pub uploaded_at: String,
}

/// How often one tag was applied to one image across labelers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagStatistic {
    pub tag_id: i64,
    pub tag_name: String,
    /// Labelers who applied this tag.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub count: i64,
    /// Labelers who submitted any tags for this image.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_labelers: i64,
    /// `count / total_labelers` as a percentage.
    pub percentage: f64,
}

/// One entry in an image's authoritative tag set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTag {
    pub id: i64,
    pub tag_id: i64,
    pub tag_name: String,
    /// Whether this entry came from an admin override rather than consensus.
    pub is_admin_override: bool,
    pub created_at: String,
}

/// Payload of `GET /admin/groups/{id}/image/{imageId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDetailData {
    pub image: ImageRecord,
    pub tag_statistics: Vec<TagStatistic>,
    pub final_tags: Vec<FinalTag>,
    pub has_admin_override: bool,
}

/// Body for `PUT /admin/image/{imageId}/final-tags`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTagsRequest {
    pub tag_ids: Vec<i64>,
}

// =============================================================
// Labeler
// =============================================================

/// Labeling progress of one image from the requesting labeler's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Pending,
    Done,
}

/// An image as listed for a labeler, with that labeler's progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerImage {
    pub id: i64,
    pub filename: String,
    pub status: ImageStatus,
}

/// Payload of `GET /labeler/groups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerGroupListData {
    pub groups: Vec<Group>,
}

/// Payload of `GET /labeler/groups/{id}/images`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerImageListData {
    pub images: Vec<LabelerImage>,
}

/// Image record with pixel data, labeler view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerImageRecord {
    pub id: i64,
    pub filename: String,
    pub status: ImageStatus,
    /// Raw image bytes, base64-encoded without a data-URL prefix.
    pub base64_data: String,
    pub filetype: String,
}

/// Response of `GET /labeler/groups/{id}/images/{imageId}`.
///
/// This endpoint returns the payload bare, without the standard envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerImageDetail {
    pub image: LabelerImageRecord,
    /// All tags defined on the image's group.
    pub group_tags: Vec<Tag>,
    /// Tags this labeler currently has on the image.
    #[serde(default)]
    pub current_tags: Vec<Tag>,
}

/// Body for `PUT /labeler/groups/{id}/images/{imageId}/tags`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTagsRequest {
    pub tag_ids: Vec<i64>,
}

/// Body for `POST /labeler/images/{imageId}/suggest_tags`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestTagsRequest {
    /// Tags the labeler already selected; excluded from suggestions.
    pub ignored_tag_ids: Vec<i64>,
}

/// Payload of `POST /labeler/images/{imageId}/suggest_tags`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestTagsData {
    /// Names of tags worth considering for the image.
    pub suggested_tags: Vec<String>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
