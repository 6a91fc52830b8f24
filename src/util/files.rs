//! File selection, base64, and download helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Image uploads travel as base64 JSON rather than multipart, and the bulk
//! export arrives as JSON to be saved from the page. Validation and string
//! handling live here as plain functions; only reading a picked `File` and
//! triggering a download touch the browser.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::net::types::UploadImageRequest;

/// Upload size cap per file.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the platform accepts for image uploads.
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// Check a picked file against type and size limits.
///
/// # Errors
///
/// Returns the message shown to the admin when the file is rejected.
pub fn validate_upload(filename: &str, mime: &str, size: u64) -> Result<(), String> {
    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Err(format!(
            "File \"{filename}\" is not a valid image type. Only PNG and JPEG files are allowed."
        ));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(format!("File \"{filename}\" is too large. Maximum size is 10MB."));
    }
    Ok(())
}

/// A picked image file read into memory, awaiting upload confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub filename: String,
    /// Full MIME type as reported by the browser.
    pub mime: String,
    /// Raw image bytes, base64-encoded without a data-URL prefix.
    pub base64_data: String,
}

/// Build the upload body for one confirmed file. The base64 payload passes
/// through untouched.
pub fn upload_request(upload: &PendingUpload, group_id: i64) -> UploadImageRequest {
    UploadImageRequest {
        filename: upload.filename.clone(),
        filetype: filetype_from_mime(&upload.mime).to_owned(),
        base64_data: upload.base64_data.clone(),
        group_id,
    }
}

/// Strip the `data:<mime>;base64,` prefix from a data URL, leaving the raw
/// base64 payload. Returns `None` when no payload separator exists.
pub fn data_url_base64(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, payload)| payload)
}

/// Filetype sent to the server for an upload: the MIME subtype.
pub fn filetype_from_mime(mime: &str) -> &str {
    mime.split_once('/').map_or(mime, |(_, subtype)| subtype)
}

/// Assemble a data URL for rendering stored base64 image bytes. Accepts
/// either a bare subtype (`"png"`) or a full MIME type (`"image/png"`).
pub fn image_data_url(filetype: &str, base64_data: &str) -> String {
    if filetype.contains('/') {
        format!("data:{filetype};base64,{base64_data}")
    } else {
        format!("data:image/{filetype};base64,{base64_data}")
    }
}

/// Filename for the bulk export download, dated from an ISO 8601 timestamp.
pub fn export_filename(date_iso: &str) -> String {
    let date = date_iso.split('T').next().unwrap_or(date_iso);
    format!("image-labeling-export-{date}.json")
}

/// Today's date as an ISO 8601 timestamp. Empty outside the browser.
pub fn current_date_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Read a picked file and return its raw base64 payload.
///
/// # Errors
///
/// Returns a displayable message when the file cannot be read.
#[cfg(feature = "hydrate")]
pub async fn read_file_base64(file: web_sys::File) -> Result<String, String> {
    let file = gloo_file::File::from(file);
    let data_url = gloo_file::futures::read_as_data_url(&file).await.map_err(|e| e.to_string())?;
    data_url_base64(&data_url)
        .map(ToOwned::to_owned)
        .ok_or_else(|| "file produced an unreadable data URL".to_owned())
}

/// Serialize `value` and hand it to the browser as a JSON file download.
pub fn download_json(value: &serde_json::Value, filename: &str) {
    #[cfg(feature = "hydrate")]
    {
        if trigger_download(value, filename).is_none() {
            log::warn!("export download failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (value, filename);
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(value: &serde_json::Value, filename: &str) -> Option<()> {
    use wasm_bindgen::JsCast;

    let serialized = serde_json::to_string_pretty(value).ok()?;
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(&serialized));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let document = web_sys::window()?.document()?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}
