use std::path::{Path, PathBuf};
use tokio::fs;

use crate::errors::{CompressionError, CompressionResult};
use super::types::{has_extension, PDF_EXTENSION};

/// Finds candidate documents directly inside a source directory
#[derive(Debug, Clone)]
pub struct FileLocator {
    extension: String,
}

impl Default for FileLocator {
    fn default() -> Self {
        Self::new(PDF_EXTENSION)
    }
}

impl FileLocator {
    pub fn new(extension: impl Into<String>) -> Self {
        Self { extension: extension.into() }
    }

    /// Return the paths of all entries in `source_directory` whose name ends
    /// with the configured extension. Not recursive; order follows the
    /// directory listing.
    pub async fn locate(&self, source_directory: &Path) -> CompressionResult<Vec<PathBuf>> {
        let is_dir = fs::metadata(source_directory)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(CompressionError::NotADirectory(source_directory.to_path_buf()));
        }

        let mut entries = fs::read_dir(source_directory).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = source_directory.join(entry.file_name());
            if has_extension(&path, &self.extension) {
                paths.push(path);
            }
        }

        log::debug!(
            "Located {} '{}' files in {}",
            paths.len(),
            self.extension,
            source_directory.display()
        );
        Ok(paths)
    }
}
