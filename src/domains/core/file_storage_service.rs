use std::io;
use std::path::Path;
use tokio::fs; // Use tokio::fs for async file operations

/// Create `path` and any missing parents. Succeeds if it already exists.
pub async fn make_output_directory(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    log::debug!("Output directory ready: {}", path.display());
    Ok(())
}

/// Recursively remove `path`.
pub async fn remove_directory(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => {
            log::debug!("Removed directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Consider it success if the directory is already gone
            log::warn!("Directory {} does not exist, nothing to remove", path.display());
            Ok(())
        }
        Err(e) => Err(e),
    }
}
