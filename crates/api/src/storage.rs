//! Local disk storage for uploaded car images.
//!
//! Each image is written once under a random, collision-free name and is
//! never modified afterwards. Files are served back by the static file
//! service mounted at `/images`.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Name used when an upload carries no usable file name.
const FALLBACK_FILE_NAME: &str = "image";

/// An image that has been written to disk.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// File name inside the upload directory (`<uuid>_<original>`).
    pub file_name: String,
    /// Public URL the image is served from.
    pub url: String,
}

/// Writes uploaded images to a directory and derives their public URLs.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    public_base_url: String,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` under a fresh name derived from `original_name`.
    ///
    /// The upload directory is created on first use.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<StoredImage> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(original_name));
        tokio::fs::write(self.dir.join(&file_name), bytes).await?;

        tracing::debug!(file_name = %file_name, size = bytes.len(), "Stored image");

        Ok(StoredImage {
            url: self.url_for(&file_name),
            file_name,
        })
    }

    /// Delete previously stored images. Failures are logged and skipped.
    pub async fn remove(&self, images: &[StoredImage]) {
        for image in images {
            if let Err(e) = tokio::fs::remove_file(self.dir.join(&image.file_name)).await {
                tracing::warn!(
                    file_name = %image.file_name,
                    error = %e,
                    "Failed to remove orphaned image"
                );
            }
        }
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/images/{file_name}", self.public_base_url)
    }
}

/// Reduce a client-supplied file name to a safe final path component.
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]` becomes
/// `_`. Leading dots are stripped so the result is never hidden or `..`.
pub fn sanitize_file_name(original: &str) -> String {
    let last = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
