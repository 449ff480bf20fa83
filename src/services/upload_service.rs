use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Checks and decodes uploaded quiz files, optionally keeping a copy on disk.
#[derive(Clone, Debug, Default)]
pub struct UploadService {
    archive_dir: Option<PathBuf>,
}

impl UploadService {
    pub fn new(archive_dir: Option<PathBuf>) -> Self {
        Self { archive_dir }
    }

    /// Returns the decoded text of a `.txt` upload.
    pub fn decode(filename: Option<&str>, data: &Bytes) -> Result<String> {
        let filename = filename.map(str::trim).unwrap_or_default();
        if filename.is_empty() {
            return Err(Error::invalid_upload("missing_file", "No file was uploaded"));
        }

        let is_txt = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);
        if !is_txt {
            return Err(Error::invalid_upload(
                "not_a_text_file",
                "Only .txt files are accepted",
            ));
        }

        let text = std::str::from_utf8(data).map_err(|e| {
            tracing::warn!("Upload {} is not valid UTF-8: {}", filename, e);
            Error::invalid_upload("invalid_encoding", "File must be UTF-8 encoded text")
        })?;

        Ok(text.to_string())
    }

    /// Writes the raw upload to the archive directory, if one is configured.
    pub async fn archive(&self, data: &Bytes) -> Result<Option<PathBuf>> {
        let Some(dir) = &self.archive_dir else {
            return Ok(None);
        };

        fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.txt", Uuid::new_v4()));
        fs::write(&path, data).await.map_err(|e| {
            tracing::error!("Failed to archive upload to {}: {}", path.display(), e);
            Error::Io(e)
        })?;

        tracing::info!("Archived upload to {}", path.display());
        Ok(Some(path))
    }
}
