use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// Copies and deletes the managed rule directories.
///
/// Each directory is handled by its own future and all of them run
/// concurrently to completion. A failure fails the whole operation, but the
/// other directories still finish and stay in their new state.
pub struct RulesSync<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    rules: &'a RulesConfig,
}

impl<'a, F: FileSystem + ?Sized> RulesSync<'a, F> {
    pub fn new(fs: &'a F, rules: &'a RulesConfig) -> Self {
        Self { fs, rules }
    }

    /// Copy every rule directory present in `package_dir` into `target_dir`.
    ///
    /// Returns the directories that were copied; ones missing from the
    /// package are skipped.
    pub async fn copy_all(&self, package_dir: &Path, target_dir: &Path) -> Result<Vec<PathBuf>> {
        if package_dir.as_os_str().is_empty() {
            return Err(Error::MissingArgument("packageDir"));
        }
        if target_dir.as_os_str().is_empty() {
            return Err(Error::MissingArgument("targetDir"));
        }

        let copies = self
            .rules
            .rule_dirs
            .iter()
            .map(|dir| self.copy_one(dir, package_dir, target_dir));

        settle(join_all(copies).await)
    }

    /// Remove every rule directory present in `target_dir`.
    ///
    /// Returns the directories that were removed.
    pub async fn delete_all(&self, target_dir: &Path) -> Result<Vec<PathBuf>> {
        if target_dir.as_os_str().is_empty() {
            return Err(Error::MissingArgument("targetDir"));
        }

        let removals = self
            .rules
            .rule_dirs
            .iter()
            .map(|dir| self.delete_one(dir, target_dir));

        settle(join_all(removals).await)
    }

    async fn copy_one(
        &self,
        dir: &Path,
        package_dir: &Path,
        target_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        let from = package_dir.join(dir);
        let to = target_dir.join(dir);

        if !self.fs.exists(&from).await {
            debug!(dir = %dir.display(), "Rule directory missing from package, skipping");
            return Ok(None);
        }

        self.fs
            .copy_dir(&from, &to, &self.rules.exclude)
            .await
            .map_err(|source| Error::Copy { from, to, source })?;

        debug!(dir = %dir.display(), "Copied rule directory");
        Ok(Some(dir.to_path_buf()))
    }

    async fn delete_one(&self, dir: &Path, target_dir: &Path) -> Result<Option<PathBuf>> {
        let path = target_dir.join(dir);

        if !self.fs.exists(&path).await {
            return Ok(None);
        }

        self.fs
            .remove_dir_all(&path)
            .await
            .map_err(|source| Error::Remove { path, source })?;

        debug!(dir = %dir.display(), "Removed rule directory");
        Ok(Some(dir.to_path_buf()))
    }
}

/// Processed directories, or the first failure once every future has settled
fn settle(results: Vec<Result<Option<PathBuf>>>) -> Result<Vec<PathBuf>> {
    let mut processed = Vec::new();
    for result in results {
        if let Some(dir) = result? {
            processed.push(dir);
        }
    }
    Ok(processed)
}
