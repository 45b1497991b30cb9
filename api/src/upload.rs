//! File upload endpoints and the upload-path → URL transform.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;

const UPLOADS_PREFIX: &str = "/uploads/";

/// Response of POST `/upload`.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    /// Server-side path of the stored file, e.g. `/uploads/rex.png`.
    pub path: String,
}

/// POST `/upload` — multipart upload of one file.
pub async fn upload_file(
    client: &ApiClient,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<UploadResponse, ApiError> {
    let part = Part::bytes(bytes).file_name(filename.to_string());
    let form = Form::new().part("file", part);
    client.post_multipart("/upload", form).await
}

/// DELETE `/upload/:filename`.
pub async fn delete_file(client: &ApiClient, filename: &str) -> Result<(), ApiError> {
    client.delete(&format!("/upload/{filename}")).await
}

/// Rewrite a stored image value into an absolute URL.
///
/// Absolute URLs pass through untouched, `/uploads/...` paths gain the API
/// origin, and bare filenames gain origin plus `/uploads/`. Applying the
/// transform twice yields the same result as once, and the empty string
/// maps to itself.
pub fn file_url(base_url: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.starts_with("http") {
        return value.to_string();
    }
    if value.starts_with(UPLOADS_PREFIX) {
        return format!("{base_url}{value}");
    }
    format!("{base_url}{UPLOADS_PREFIX}{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(file_url(BASE, ""), "");
    }

    #[test]
    fn bare_filename_gains_origin_and_prefix() {
        assert_eq!(file_url(BASE, "rex.png"), "http://localhost:3000/uploads/rex.png");
    }

    #[test]
    fn uploads_path_gains_origin_only() {
        assert_eq!(
            file_url(BASE, "/uploads/rex.png"),
            "http://localhost:3000/uploads/rex.png"
        );
    }

    #[test]
    fn absolute_url_passes_through() {
        let url = "https://cdn.example.com/rex.png";
        assert_eq!(file_url(BASE, url), url);
    }

    #[test]
    fn transform_is_idempotent() {
        for value in ["", "rex.png", "/uploads/rex.png", "http://x.test/y.png"] {
            let once = file_url(BASE, value);
            let twice = file_url(BASE, &once);
            assert_eq!(twice, once, "not idempotent for {value:?}");
        }
    }
}
