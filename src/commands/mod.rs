//! The `init`, `update`, `replace-all` and `status` commands.
//!
//! Each command has an `execute` function operating on explicit package and
//! target directories, and a `run` entry point used by the CLI that resolves
//! those directories and prints the outcome.

pub mod init;
pub mod replace_all;
pub mod status;
pub mod update;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::version::is_valid_version;

/// Fail fast if either directory argument is empty
pub(crate) fn require_dirs(package_dir: &Path, target_dir: &Path) -> crate::error::Result<()> {
    if package_dir.as_os_str().is_empty() {
        return Err(Error::MissingArgument("packageDir"));
    }
    if target_dir.as_os_str().is_empty() {
        return Err(Error::MissingArgument("targetDir"));
    }
    Ok(())
}

/// Reject a package version that the version file could not store
pub(crate) fn require_valid_package_version(version: &str) -> crate::error::Result<()> {
    if !is_valid_version(version) {
        return Err(Error::InvalidVersion {
            role: "package",
            value: version.to_string(),
        });
    }
    Ok(())
}

/// Package directory from configuration and the current directory as target
pub(crate) fn resolve_dirs(config: &Config) -> Result<(PathBuf, PathBuf)> {
    let package_dir = config.resolve_package_dir()?;
    let target_dir = std::env::current_dir().context("Failed to determine current directory")?;
    Ok((package_dir, target_dir))
}
