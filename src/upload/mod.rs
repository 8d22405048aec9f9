//! Image upload transport.
//!
//! Posts the file as multipart form data to the configured endpoint and
//! resolves the public URL out of the several response shapes the upload
//! service is known to answer with.

use reqwest::multipart;
use serde_json::Value;

use crate::errors::AdminError;

/// Uploads image bytes and resolves the resulting public URL.
#[derive(Debug, Clone)]
pub struct Uploader {
    http: reqwest::Client,
    endpoint: Option<String>,
    public_base: Option<String>,
}

impl Uploader {
    pub fn new(http: reqwest::Client, endpoint: Option<String>, public_base: Option<String>) -> Self {
        Self {
            http,
            endpoint,
            public_base: public_base.map(|base| base.trim_end_matches('/').to_string()),
        }
    }

    /// Upload one image and return its public URL.
    ///
    /// The byte transport itself is the upload service's concern; only the
    /// URL string is stored in content records.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<String, AdminError> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            AdminError::Config("Missing UNLSH_UPLOAD_ENDPOINT for photo uploads".to_string())
        })?;

        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| AdminError::Upload(format!("Failed to upload {}: {}", filename, err)))?;

        if !response.status().is_success() {
            return Err(AdminError::Upload(format!("Failed to upload {}", filename)));
        }

        let data: Value = response.json().await.unwrap_or(Value::Null);

        resolve_upload_url(&data, filename, self.public_base.as_deref())
            .ok_or_else(|| AdminError::Upload("Upload response missing a file URL".to_string()))
    }
}

/// Resolve the public URL from an upload response.
///
/// Checked in order: `imageUrl`, `publicUrl`, `url`, `Location`, `location`,
/// then the `uploadedFiles` entry matching the filename (else the first),
/// then a bare `filename` joined with the configured public base.
pub fn resolve_upload_url(data: &Value, filename: &str, public_base: Option<&str>) -> Option<String> {
    for key in ["imageUrl", "publicUrl", "url", "Location", "location"] {
        if let Some(url) = non_empty_str(data.get(key)) {
            return Some(url.to_string());
        }
    }

    if let Some(files) = data.get("uploadedFiles").and_then(Value::as_array) {
        let entry = files
            .iter()
            .find(|entry| {
                entry.get("filename").and_then(Value::as_str) == Some(filename)
            })
            .or_else(|| files.first());

        if let Some(entry) = entry {
            if let Some(url) = non_empty_str(entry.get("imageUrl")) {
                return Some(url.to_string());
            }
            if let (Some(name), Some(base)) = (non_empty_str(entry.get("filename")), public_base) {
                return Some(format!("{}/{}", base, name));
            }
        }
    }

    if let (Some(name), Some(base)) = (non_empty_str(data.get("filename")), public_base) {
        return Some(format!("{}/{}", base, name));
    }

    None
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
