//! Directory management.

use std::path::Path;

use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !tokio::fs::try_exists(path).await? {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

/// Delete every file directly inside `dir`.
///
/// Only one level is touched: subdirectories are left alone and reported.
/// A missing directory is created. Returns the number of files removed.
pub async fn clear_directory(dir: &Path) -> Result<usize> {
    ensure_dir(dir).await?;

    let mut removed = 0;
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        if entry.file_type().await?.is_dir() {
            tracing::warn!("Leaving subdirectory in place: {}", path.display());
            continue;
        }

        tokio::fs::remove_file(&path).await?;
        removed += 1;
    }

    Ok(removed)
}
