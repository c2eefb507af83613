//! Filesystem access used by the version store and the rules synchronizer.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The filesystem primitives the tool relies on
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// True if `path` exists and is accessible. Never fails.
    async fn exists(&self, path: &Path) -> bool;

    /// Recursively copy `from` into `to`, overwriting existing files.
    /// Entries whose file name is listed in `exclude` are skipped.
    async fn copy_dir(&self, from: &Path, to: &Path, exclude: &[String]) -> io::Result<()>;

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// `FileSystem` backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl FileSystem for TokioFs {
    async fn exists(&self, path: &Path) -> bool {
        path_exists(path).await
    }

    async fn copy_dir(&self, from: &Path, to: &Path, exclude: &[String]) -> io::Result<()> {
        let from = from.to_path_buf();
        let to = to.to_path_buf();
        let exclude = exclude.to_vec();

        tokio::task::spawn_blocking(move || copy_tree(&from, &to, &exclude))
            .await
            .map_err(io::Error::other)?
    }

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_dir_all(path).await
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

/// Check whether a path exists, treating any access error as absence
pub async fn path_exists(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

fn copy_tree(from: &Path, to: &Path, exclude: &[String]) -> io::Result<()> {
    let walker = WalkDir::new(from).follow_links(true).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !exclude
                .iter()
                .any(|name| entry.file_name().to_str() == Some(name.as_str()))
    });

    for entry in walker {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?;
        let dest: PathBuf = to.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(())
}
