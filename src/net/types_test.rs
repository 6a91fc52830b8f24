use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User { id: 7, username: "alice".to_owned(), role: Role::Admin }
}

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Labeler).unwrap(), "\"labeler\"");
}

#[test]
fn role_deserializes_from_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"labeler\"").unwrap(), Role::Labeler);
}

#[test]
fn role_rejects_unknown_values() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
}

#[test]
fn role_as_str_matches_wire_form() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Labeler.as_str(), "labeler");
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_round_trip() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user, back);
}

#[test]
fn user_rejects_missing_role() {
    let json = r#"{"id": 1, "username": "bob"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_into_data_returns_payload_on_success() {
    let envelope = Envelope { success: true, message: "ok".to_owned(), data: Some(42_i64) };
    assert_eq!(envelope.into_data(), Ok(42));
}

#[test]
fn envelope_into_data_fails_when_flag_false() {
    let envelope: Envelope<i64> =
        Envelope { success: false, message: "Username already exists".to_owned(), data: None };
    assert_eq!(envelope.into_data(), Err("Username already exists".to_owned()));
}

#[test]
fn envelope_into_data_fails_when_payload_missing() {
    let envelope: Envelope<i64> = Envelope { success: true, message: String::new(), data: None };
    assert!(envelope.into_data().is_err());
}

#[test]
fn envelope_into_message_keeps_success_message() {
    let envelope: Envelope<()> =
        Envelope { success: true, message: "Labeler deleted successfully".to_owned(), data: None };
    assert_eq!(envelope.into_message(), Ok("Labeler deleted successfully".to_owned()));
}

#[test]
fn envelope_into_message_substitutes_empty_failure_message() {
    let envelope: Envelope<()> = Envelope { success: false, message: String::new(), data: None };
    assert_eq!(envelope.into_message(), Err("request failed".to_owned()));
}

#[test]
fn envelope_message_defaults_when_absent() {
    let json = r#"{"success": true, "data": {"user_id": 3, "token": "t"}}"#;
    let envelope: Envelope<LoginData> = serde_json::from_str(json).unwrap();
    assert!(envelope.message.is_empty());
    assert_eq!(envelope.into_data().unwrap().token, "t");
}

// =============================================================
// List payload fixtures
// =============================================================

#[test]
fn labeler_list_parses_server_fixture() {
    let json = r#"{
        "success": true,
        "message": "Labelers retrieved successfully",
        "data": {
            "labelers": [
                {"id": 1, "username": "kim", "group_ids": [2, 3]},
                {"id": 2, "username": "lee", "group_ids": []}
            ],
            "total": 2
        }
    }"#;
    let envelope: Envelope<LabelerListData> = serde_json::from_str(json).unwrap();
    let data = envelope.into_data().unwrap();
    assert_eq!(data.total, 2);
    assert_eq!(data.labelers[0].group_ids, vec![2, 3]);
}

#[test]
fn labeler_defaults_group_ids_when_missing() {
    let json = r#"{"id": 9, "username": "solo"}"#;
    let labeler: Labeler = serde_json::from_str(json).unwrap();
    assert!(labeler.group_ids.is_empty());
}

#[test]
fn group_detail_parses_nested_collections() {
    let json = r#"{
        "group": {"id": 4, "name": "Street scenes", "description": null},
        "labelers": [{"id": 1, "username": "kim", "group_ids": [4]}],
        "tags": [{"id": 10, "name": "car", "description": "Any vehicle"}],
        "images": [{"id": 100, "filename": "a.png", "filetype": "png", "uploaded_at": "2025-03-01 10:00:00"}]
    }"#;
    let detail: GroupDetailData = serde_json::from_str(json).unwrap();
    assert_eq!(detail.group.name, "Street scenes");
    assert_eq!(detail.tags[0].description.as_deref(), Some("Any vehicle"));
    assert_eq!(detail.images.len(), 1);
}

// =============================================================
// Image detail + statistics
// =============================================================

#[test]
fn image_detail_parses_statistics_and_final_tags() {
    let json = r#"{
        "image": {
            "id": 100,
            "filename": "a.png",
            "filetype": "png",
            "base64_data": "aGVsbG8=",
            "uploaded_at": "2025-03-01 10:00:00"
        },
        "tag_statistics": [
            {"tag_id": 10, "tag_name": "car", "count": 2, "total_labelers": 5, "percentage": 40.0},
            {"tag_id": 11, "tag_name": "tree", "count": 3, "total_labelers": 5, "percentage": 60.0}
        ],
        "final_tags": [
            {"id": 1, "tag_id": 11, "tag_name": "tree", "is_admin_override": false, "created_at": "2025-03-02T08:00:00.000Z"}
        ],
        "has_admin_override": false
    }"#;
    let detail: ImageDetailData = serde_json::from_str(json).unwrap();
    assert_eq!(detail.tag_statistics.len(), 2);
    assert_eq!(detail.final_tags[0].tag_name, "tree");
    assert!(!detail.has_admin_override);
}

#[test]
fn tag_statistic_accepts_integral_float_counts() {
    let json = r#"{"tag_id": 1, "tag_name": "car", "count": 2.0, "total_labelers": 5.0, "percentage": 40.0}"#;
    let stat: TagStatistic = serde_json::from_str(json).unwrap();
    assert_eq!(stat.count, 2);
    assert_eq!(stat.total_labelers, 5);
}

#[test]
fn tag_statistic_rejects_fractional_count() {
    let json = r#"{"tag_id": 1, "tag_name": "car", "count": 2.5, "total_labelers": 5, "percentage": 40.0}"#;
    assert!(serde_json::from_str::<TagStatistic>(json).is_err());
}

#[test]
fn upload_request_preserves_base64_payload() {
    let payload = "iVBORw0KGgoAAAANSUhEUg==";
    let request = UploadImageRequest {
        filename: "photo.png".to_owned(),
        filetype: "png".to_owned(),
        base64_data: payload.to_owned(),
        group_id: 4,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains(payload));

    let detail_json = format!(
        r#"{{
            "image": {{
                "id": 100,
                "filename": "photo.png",
                "filetype": "png",
                "base64_data": "{payload}",
                "uploaded_at": "2025-03-01 10:00:00"
            }},
            "tag_statistics": [],
            "final_tags": [],
            "has_admin_override": false
        }}"#
    );
    let detail: ImageDetailData = serde_json::from_str(&detail_json).unwrap();
    assert_eq!(detail.image.base64_data, payload);
}

// =============================================================
// Request body shapes
// =============================================================

#[test]
fn create_labeler_omits_group_ids_when_none() {
    let request = CreateLabelerRequest {
        username: "kim".to_owned(),
        password: "secret".to_owned(),
        group_ids: None,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(!json.contains("group_ids"));
}

#[test]
fn update_labeler_serializes_only_set_fields() {
    let request = UpdateLabelerRequest { password: Some("fresh".to_owned()), ..Default::default() };
    let json = serde_json::to_string(&request).unwrap();
    assert_eq!(json, r#"{"password":"fresh"}"#);
}

// =============================================================
// Labeler payloads
// =============================================================

#[test]
fn image_status_deserializes_from_lowercase() {
    assert_eq!(serde_json::from_str::<ImageStatus>("\"pending\"").unwrap(), ImageStatus::Pending);
    assert_eq!(serde_json::from_str::<ImageStatus>("\"done\"").unwrap(), ImageStatus::Done);
}

#[test]
fn labeler_image_detail_parses_bare_payload() {
    let json = r#"{
        "image": {"id": 100, "filename": "a.png", "status": "pending", "base64_data": "aGVsbG8=", "filetype": "png"},
        "group_tags": [
            {"id": 10, "name": "car", "description": null},
            {"id": 11, "name": "tree", "description": null}
        ],
        "current_tags": [
            {"id": 11, "name": "tree", "description": null}
        ]
    }"#;
    let detail: LabelerImageDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.image.status, ImageStatus::Pending);
    assert_eq!(detail.group_tags.len(), 2);
    assert_eq!(detail.current_tags.len(), 1);
    assert_eq!(detail.current_tags[0].id, 11);
}

#[test]
fn labeler_image_detail_defaults_current_tags() {
    let json = r#"{
        "image": {"id": 100, "filename": "a.png", "status": "pending", "base64_data": "", "filetype": "png"},
        "group_tags": []
    }"#;
    let detail: LabelerImageDetail = serde_json::from_str(json).unwrap();
    assert!(detail.current_tags.is_empty());
}

#[test]
fn suggest_tags_data_defaults_to_empty() {
    let data = SuggestTagsData::default();
    assert!(data.suggested_tags.is_empty());
}
