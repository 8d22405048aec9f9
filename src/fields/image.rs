//! Image-upload field values.
//!
//! The field stores only the public URL of the uploaded image. Byte
//! transport is delegated to the upload endpoint; failures are kept inline
//! on this field and never block the rest of the form.

use crate::upload::Uploader;

/// Headless state of one image-upload form control.
#[derive(Debug, Clone, Default)]
pub struct ImageField {
    value: String,
    is_uploading: bool,
    upload_error: Option<String>,
}

impl ImageField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_uploading: false,
            upload_error: None,
        }
    }

    /// The stored public URL, empty when no image is set.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    /// Inline upload failure, if the last upload failed.
    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    /// Replace the URL directly (e.g. restoring a record's value).
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Clear back to empty; also clears any inline error.
    pub fn clear(&mut self) {
        self.value.clear();
        self.upload_error = None;
    }

    /// Upload bytes and store the resolved URL.
    ///
    /// On failure the previous value is kept and the error is recorded
    /// inline; callers read it via [`ImageField::upload_error`].
    pub async fn upload(&mut self, uploader: &Uploader, bytes: Vec<u8>, filename: &str) {
        self.upload_error = None;
        self.is_uploading = true;
        match uploader.upload_image(bytes, filename).await {
            Ok(url) => self.value = url,
            Err(err) => self.upload_error = Some(err.message()),
        }
        self.is_uploading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_value_and_error() {
        let mut field = ImageField::new("https://cdn/banner.jpg");
        field.upload_error = Some("boom".to_string());
        field.clear();
        assert_eq!(field.value(), "");
        assert!(field.upload_error().is_none());
    }

    #[tokio::test]
    async fn test_upload_without_endpoint_records_inline_error() {
        let uploader = Uploader::new(reqwest::Client::new(), None, None);
        let mut field = ImageField::new("https://cdn/previous.jpg");

        field.upload(&uploader, vec![1, 2, 3], "banner.jpg").await;

        assert!(field.upload_error().is_some());
        // A failed upload never clobbers the existing value.
        assert_eq!(field.value(), "https://cdn/previous.jpg");
        assert!(!field.is_uploading());
    }
}
