use anyhow::Result;
use colored::*;
use std::path::Path;
use tracing::info;

use crate::config::{Config, RulesConfig};
use crate::error::Error;
use crate::fs::{FileSystem, TokioFs};
use crate::manifest::package_version;
use crate::sync::RulesSync;
use crate::version_file::{current_version, write_version, VersionInfo};

/// Install the rules into a project that has none yet.
///
/// Returns the version that was installed.
pub async fn execute<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    package_dir: &Path,
    target_dir: &Path,
) -> crate::error::Result<String> {
    super::require_dirs(package_dir, target_dir)?;

    if let Some(existing) = current_version(fs, rules, target_dir).await {
        return Err(Error::AlreadyInitialized(existing));
    }

    let version = package_version(fs, package_dir).await?;
    super::require_valid_package_version(&version)?;
    let info = VersionInfo::new(&version);

    let copied = RulesSync::new(fs, rules).copy_all(package_dir, target_dir).await?;

    write_version(fs, rules, target_dir, &info).await?;

    info!(%version, dirs = copied.len(), "Rules initialized");
    Ok(version)
}

/// Run the init command in the current directory
pub async fn run(config: &Config) -> Result<()> {
    let (package_dir, target_dir) = super::resolve_dirs(config)?;
    let version = execute(&TokioFs, &RulesConfig::default(), &package_dir, &target_dir).await?;

    println!(
        "{} Rules initialized successfully ({})",
        "✓".green(),
        format!("v{}", version).cyan()
    );

    Ok(())
}
