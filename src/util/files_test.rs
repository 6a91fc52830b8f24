use super::*;

// =============================================================
// Upload validation
// =============================================================

#[test]
fn png_jpeg_and_jpg_pass_validation() {
    assert!(validate_upload("a.png", "image/png", 1024).is_ok());
    assert!(validate_upload("b.jpeg", "image/jpeg", 1024).is_ok());
    assert!(validate_upload("c.jpg", "image/jpg", 1024).is_ok());
}

#[test]
fn other_mime_types_are_rejected_with_filename() {
    let err = validate_upload("tune.gif", "image/gif", 1024).unwrap_err();
    assert!(err.contains("tune.gif"));
    assert!(err.contains("not a valid image type"));
}

#[test]
fn oversized_file_is_rejected() {
    let err = validate_upload("big.png", "image/png", MAX_UPLOAD_BYTES + 1).unwrap_err();
    assert!(err.contains("big.png"));
    assert!(err.contains("too large"));
}

#[test]
fn file_at_exact_limit_passes() {
    assert!(validate_upload("edge.png", "image/png", MAX_UPLOAD_BYTES).is_ok());
}

#[test]
fn type_check_runs_before_size_check() {
    let err = validate_upload("big.gif", "image/gif", MAX_UPLOAD_BYTES + 1).unwrap_err();
    assert!(err.contains("not a valid image type"));
}

// =============================================================
// Data URL handling
// =============================================================

#[test]
fn data_url_base64_strips_prefix() {
    assert_eq!(data_url_base64("data:image/png;base64,aGVsbG8="), Some("aGVsbG8="));
}

#[test]
fn data_url_base64_requires_separator() {
    assert_eq!(data_url_base64("aGVsbG8="), None);
}

#[test]
fn data_url_base64_allows_empty_payload() {
    assert_eq!(data_url_base64("data:image/png;base64,"), Some(""));
}

#[test]
fn filetype_from_mime_takes_subtype() {
    assert_eq!(filetype_from_mime("image/png"), "png");
    assert_eq!(filetype_from_mime("image/jpeg"), "jpeg");
}

#[test]
fn filetype_from_mime_passes_bare_value_through() {
    assert_eq!(filetype_from_mime("png"), "png");
}

#[test]
fn image_data_url_prefixes_bare_subtype() {
    assert_eq!(image_data_url("png", "aGVsbG8="), "data:image/png;base64,aGVsbG8=");
}

#[test]
fn image_data_url_keeps_full_mime_type() {
    assert_eq!(image_data_url("image/jpeg", "aGVsbG8="), "data:image/jpeg;base64,aGVsbG8=");
}

#[test]
fn base64_survives_upload_and_render_path() {
    let payload = "iVBORw0KGgo=";
    let data_url = image_data_url("png", payload);
    assert_eq!(data_url_base64(&data_url), Some(payload));
}

#[test]
fn upload_request_passes_base64_through_unchanged() {
    let pending = PendingUpload {
        filename: "cat.png".to_owned(),
        mime: "image/png".to_owned(),
        base64_data: "iVBORw0KGgo=".to_owned(),
    };
    let request = upload_request(&pending, 7);
    assert_eq!(request.filename, "cat.png");
    assert_eq!(request.filetype, "png");
    assert_eq!(request.base64_data, "iVBORw0KGgo=");
    assert_eq!(request.group_id, 7);
}

// =============================================================
// Export filename
// =============================================================

#[test]
fn export_filename_uses_date_part() {
    assert_eq!(
        export_filename("2026-08-21T10:30:00.000Z"),
        "image-labeling-export-2026-08-21.json"
    );
}

#[test]
fn export_filename_tolerates_bare_date() {
    assert_eq!(export_filename("2026-08-21"), "image-labeling-export-2026-08-21.json");
}

#[test]
fn current_date_is_empty_off_wasm() {
    assert_eq!(current_date_iso(), "");
}
