// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// A binary file received with a request.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl MediaUpload {
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            file_name: None,
            content_type: None,
            data: data.into(),
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Any `image/*` type except SVG, which can carry script and would be
    /// served back from our own origin.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.as_deref().is_some_and(is_raster_image)
    }
}

pub(crate) fn is_raster_image(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence.starts_with("image/") && essence != "image/svg+xml"
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persists the upload and returns the stored file name.
    async fn save(&self, upload: MediaUpload) -> ApplicationResult<String>;
    async fn delete(&self, file_name: &str) -> ApplicationResult<()>;
}
