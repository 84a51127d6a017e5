//! Filesystem-backed media store for uploaded cover pictures.

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::media::{MediaStore, MediaUpload, is_raster_image},
};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const FALLBACK_EXTENSION: &str = "bin";

pub struct LocalMediaStore {
    /// Directory receiving the uploads, e.g. `public/uploaded_pictures`.
    root_path: PathBuf,
}

impl LocalMediaStore {
    /// Creates the upload directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error when the directory cannot be created.
    pub async fn new(root: impl Into<PathBuf>) -> ApplicationResult<Self> {
        let root_path = root.into();
        fs::create_dir_all(&root_path).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "cannot create upload directory {}: {err}",
                root_path.display()
            ))
        })?;
        Ok(Self { root_path })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root_path
    }

    fn resolve(&self, file_name: &str) -> ApplicationResult<PathBuf> {
        let is_plain = !file_name.is_empty()
            && !file_name.contains(['/', '\\'])
            && file_name != "."
            && file_name != "..";
        if !is_plain {
            return Err(ApplicationError::validation(format!(
                "invalid media file name: {file_name}"
            )));
        }
        Ok(self.root_path.join(file_name))
    }
}

/// Picks the extension from the content type first, then from the original
/// file name.
fn guess_extension(upload: &MediaUpload) -> String {
    let from_mime = upload
        .content_type
        .as_deref()
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .and_then(|ct| preferred_extension(&ct));

    from_mime
        .or_else(|| {
            upload
                .file_name
                .as_deref()
                .and_then(|name| Path::new(name).extension())
                .and_then(OsStr::to_str)
                .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
                .map(str::to_ascii_lowercase)
                .filter(|ext| serves_as_raster_image(ext))
        })
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

// keeps ServeDir from answering with text/html or image/svg+xml
fn serves_as_raster_image(extension: &str) -> bool {
    mime_guess::from_ext(extension)
        .first()
        .is_some_and(|mime| is_raster_image(mime.essence_str()))
}

fn preferred_extension(content_type: &str) -> Option<String> {
    // mime_guess lists "jpe" first for image/jpeg
    match content_type {
        "image/jpeg" => return Some("jpg".into()),
        "image/svg+xml" => return None,
        _ => {}
    }
    mime_guess::get_mime_extensions_str(content_type)
        .and_then(<[&str]>::first)
        .map(ToString::to_string)
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(&self, upload: MediaUpload) -> ApplicationResult<String> {
        let file_name = format!("{}.{}", Uuid::new_v4().simple(), guess_extension(&upload));
        let target = self.resolve(&file_name)?;

        fs::write(&target, &upload.data).await.map_err(|err| {
            ApplicationError::infrastructure(format!("failed to store upload: {err}"))
        })?;

        tracing::debug!(file_name = %file_name, bytes = upload.data.len(), "stored media file");
        Ok(file_name)
    }

    async fn delete(&self, file_name: &str) -> ApplicationResult<()> {
        let target = self.resolve(file_name)?;
        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(file_name, "media file already gone");
                Ok(())
            }
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "failed to delete {file_name}: {err}"
            ))),
        }
    }
}
