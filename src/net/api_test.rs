use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn labeler_endpoint_includes_id() {
    assert_eq!(labeler_endpoint(7), "/admin/labeler/7");
}

#[test]
fn group_endpoints_include_ids() {
    assert_eq!(group_endpoint(4), "/admin/groups/4");
    assert_eq!(group_members_endpoint(4), "/admin/groups/4/labelers");
    assert_eq!(group_member_endpoint(4, 9), "/admin/groups/4/labelers/9");
}

#[test]
fn tag_endpoints_include_ids() {
    assert_eq!(tag_endpoint(10), "/admin/tag/10");
    assert_eq!(group_tags_endpoint(4), "/admin/tag/group/4");
}

#[test]
fn image_endpoints_include_ids() {
    assert_eq!(group_image_endpoint(4, 100), "/admin/groups/4/image/100");
    assert_eq!(final_tags_endpoint(100), "/admin/image/100/final-tags");
    assert_eq!(auto_generate_endpoint(100), "/admin/image/100/final-tags/auto-generate");
}

#[test]
fn labeler_side_endpoints_include_ids() {
    assert_eq!(labeler_group_images_endpoint(4), "/labeler/groups/4/images");
    assert_eq!(labeler_image_endpoint(4, 100), "/labeler/groups/4/images/100");
    assert_eq!(labeler_image_tags_endpoint(4, 100), "/labeler/groups/4/images/100/tags");
    assert_eq!(suggest_tags_endpoint(100), "/labeler/images/100/suggest_tags");
}

// =============================================================
// Header assembly
// =============================================================

#[test]
fn headers_carry_bearer_token_when_present() {
    let headers = request_headers(Some("tok-123"));
    assert!(headers.contains(&("Content-Type", "application/json".to_owned())));
    assert!(headers.contains(&("Authorization", "Bearer tok-123".to_owned())));
}

#[test]
fn headers_omit_authorization_when_token_absent() {
    let headers = request_headers(None);
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
    assert!(!headers.iter().any(|(name, _)| *name == "Authorization"));
}

#[test]
fn headers_never_contain_bearer_null() {
    for token in [None, Some("tok")] {
        for (_, value) in request_headers(token) {
            assert_ne!(value, "Bearer null");
        }
    }
}

// =============================================================
// Client basics
// =============================================================

#[test]
fn client_reads_token_from_source() {
    let client = ApiClient::new(API_BASE, || Some("tok-1".to_owned()));
    assert_eq!(client.token(), Some("tok-1".to_owned()));
}

#[test]
fn client_joins_base_and_path() {
    let client = ApiClient::new("/api/v1", || None);
    assert_eq!(client.url("/admin/labeler"), "/api/v1/admin/labeler");
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn extract_passes_plain_text_through() {
    assert_eq!(extract_error_message("something broke"), "something broke");
}

#[test]
fn extract_prefers_json_message_field() {
    assert_eq!(
        extract_error_message(r#"{"success": false, "message": "Tag name already exists", "data": null}"#),
        "Tag name already exists"
    );
}

#[test]
fn extract_falls_back_to_json_error_field() {
    assert_eq!(
        extract_error_message(r#"{"success": false, "error": "You are not authorized to access this group", "data": null}"#),
        "You are not authorized to access this group"
    );
}

#[test]
fn extract_unwraps_bare_json_string() {
    assert_eq!(extract_error_message("\"Invalid credentials\""), "Invalid credentials");
}

#[test]
fn extract_trims_raw_fallback() {
    assert_eq!(extract_error_message("  gateway timeout \n"), "gateway timeout");
}

#[test]
fn extract_ignores_non_string_message() {
    assert_eq!(extract_error_message(r#"{"message": 42}"#), r#"{"message": 42}"#);
}

// =============================================================
// ApiError accessors
// =============================================================

#[test]
fn http_error_exposes_status() {
    let err = ApiError::Http { status: 403, status_text: "Forbidden".to_owned(), body: String::new() };
    assert_eq!(err.status(), Some(403));
}

#[test]
fn transport_error_has_no_status() {
    assert_eq!(ApiError::Transport("connection refused".to_owned()).status(), None);
}

#[test]
fn http_error_message_parses_json_body() {
    let err = ApiError::Http {
        status: 400,
        status_text: "Bad Request".to_owned(),
        body: r#"{"success": false, "message": "Username already exists", "data": null}"#.to_owned(),
    };
    assert_eq!(err.message(), "Username already exists");
}

#[test]
fn http_error_message_falls_back_to_status_line() {
    let err = ApiError::Http { status: 502, status_text: "Bad Gateway".to_owned(), body: String::new() };
    assert_eq!(err.message(), "HTTP 502 Bad Gateway");
}

#[test]
fn transport_error_message_is_verbatim() {
    assert_eq!(ApiError::Transport("Failed to fetch".to_owned()).message(), "Failed to fetch");
}

// =============================================================
// Result flattening
// =============================================================

use crate::net::types::Envelope;

fn ok_envelope<T>(data: T) -> ApiResult<Envelope<T>> {
    Ok(ApiSuccess {
        data: Envelope { success: true, message: "ok".to_owned(), data: Some(data) },
        status: 200,
        status_text: "OK".to_owned(),
    })
}

#[test]
fn api_data_returns_payload_for_success() {
    assert_eq!(api_data(ok_envelope(5_i64)), Ok(5));
}

#[test]
fn api_data_surfaces_envelope_failure() {
    let result: ApiResult<Envelope<i64>> = Ok(ApiSuccess {
        data: Envelope { success: false, message: "Group not found".to_owned(), data: None },
        status: 200,
        status_text: "OK".to_owned(),
    });
    assert_eq!(api_data(result), Err("Group not found".to_owned()));
}

#[test]
fn api_data_surfaces_transport_failure() {
    let result: ApiResult<Envelope<i64>> = Err(ApiError::Transport("offline".to_owned()));
    assert_eq!(api_data(result), Err("offline".to_owned()));
}

#[test]
fn api_message_returns_success_message() {
    let result: ApiResult<Envelope<()>> = Ok(ApiSuccess {
        data: Envelope { success: true, message: "Tag deleted successfully".to_owned(), data: None },
        status: 200,
        status_text: "OK".to_owned(),
    });
    assert_eq!(api_message(result), Ok("Tag deleted successfully".to_owned()));
}

#[test]
fn api_message_parses_json_error_body() {
    let result: ApiResult<Envelope<()>> = Err(ApiError::Http {
        status: 403,
        status_text: "Forbidden".to_owned(),
        body: "\"Invalid credentials\"".to_owned(),
    });
    assert_eq!(api_message(result), Err("Invalid credentials".to_owned()));
}
