// components/liked_downloader/src/staging.rs
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::options::InvocationOptions;
use crate::types::{DownloadError, Error, UsageError};

/// Directories handed to yt-dlp, created and canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staging {
    pub download_dir: PathBuf,
    pub temp_dir: Option<PathBuf>,
}

/// Check the download and staging directories against each other, then create them and
/// get the staging one ready for use. Nothing is created when a check fails.
pub async fn prepare(options: &InvocationOptions) -> Result<Staging, Error> {
    let download_dir = resolve(&options.download_directory)?;

    if let Some(dir) = options.staging_directory() {
        let temp_dir = resolve(dir)?;
        if temp_dir == download_dir {
            return Err(UsageError::SharedDirectory(temp_dir).into());
        }
        // clearing the staging directory would take the download directory with it
        if download_dir.starts_with(&temp_dir) {
            return Err(UsageError::NestedDirectory {
                download: download_dir,
                temp: temp_dir,
            }
            .into());
        }
        if !options.clear_temp_directory && temp_dir.is_dir() && !is_empty(&temp_dir).await? {
            return Err(UsageError::TempDirectoryNotEmpty(temp_dir).into());
        }
    }

    let download_dir = ensure_dir(&options.download_directory).await?;
    let temp_dir = match options.staging_directory() {
        Some(dir) => {
            let dir = ensure_dir(dir).await?;
            if options.clear_temp_directory {
                let removed = clear_dir(&dir).await?;
                info!("Cleared {} entries from {}", removed, dir.display());
            }
            Some(dir)
        }
        None => None,
    };

    debug!(?download_dir, ?temp_dir, "Staging ready");
    Ok(Staging {
        download_dir,
        temp_dir,
    })
}

/// Absolute, symlink-free form of `path`, which need not exist yet.
/// The deepest existing ancestor is canonicalized and the rest is appended.
fn resolve(path: &Path) -> Result<PathBuf, DownloadError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(DownloadError::io("reading the working directory"))?
            .join(path)
    };

    // `..` under a directory that does not exist yet can only be handled lexically
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other.as_os_str()),
        }
    }

    let mut existing = normalized.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = dunce::canonicalize(existing)
        .map_err(DownloadError::io(format!("resolving {}", path.display())))?;
    for component in missing.iter().rev() {
        resolved.push(component);
    }
    Ok(resolved)
}

async fn ensure_dir(path: &Path) -> Result<PathBuf, DownloadError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(DownloadError::io(format!("creating {}", path.display())))?;
    dunce::canonicalize(path).map_err(DownloadError::io(format!("resolving {}", path.display())))
}

async fn is_empty(path: &Path) -> Result<bool, DownloadError> {
    let mut entries = tokio::fs::read_dir(path)
        .await
        .map_err(DownloadError::io(format!("reading {}", path.display())))?;
    let first = entries
        .next_entry()
        .await
        .map_err(DownloadError::io(format!("reading {}", path.display())))?;
    Ok(first.is_none())
}

/// Remove everything inside `path`, keeping the directory itself.
pub async fn clear_dir(path: &Path) -> Result<usize, DownloadError> {
    let read_err = || DownloadError::io(format!("reading {}", path.display()));
    let mut entries = tokio::fs::read_dir(path).await.map_err(read_err())?;
    let mut removed = 0;

    while let Some(entry) = entries.next_entry().await.map_err(read_err())? {
        let entry_path = entry.path();
        let file_type = entry.file_type().await.map_err(read_err())?;
        let result = if file_type.is_dir() {
            tokio::fs::remove_dir_all(&entry_path).await
        } else {
            tokio::fs::remove_file(&entry_path).await
        };
        result.map_err(DownloadError::io(format!("removing {}", entry_path.display())))?;
        debug!("Removed {}", entry_path.display());
        removed += 1;
    }

    Ok(removed)
}
