use anyhow::Result;
use colored::*;
use std::path::Path;
use tracing::info;

use crate::config::{Config, RulesConfig};
use crate::fs::{FileSystem, TokioFs};
use crate::manifest::package_version;
use crate::sync::RulesSync;
use crate::version_file::{write_version, VersionInfo};

/// Delete the installed rules and install a fresh copy, whatever the
/// current install state. Returns the version that was installed.
pub async fn execute<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    package_dir: &Path,
    target_dir: &Path,
) -> crate::error::Result<String> {
    super::require_dirs(package_dir, target_dir)?;

    let version = package_version(fs, package_dir).await?;
    super::require_valid_package_version(&version)?;
    let info = VersionInfo::new(&version);

    let sync = RulesSync::new(fs, rules);
    let removed = sync.delete_all(target_dir).await?;
    let copied = sync.copy_all(package_dir, target_dir).await?;

    write_version(fs, rules, target_dir, &info).await?;

    info!(%version, removed = removed.len(), copied = copied.len(), "Rules replaced");
    Ok(version)
}

/// Run the replace-all command in the current directory
pub async fn run(config: &Config) -> Result<()> {
    let (package_dir, target_dir) = super::resolve_dirs(config)?;
    let version = execute(&TokioFs, &RulesConfig::default(), &package_dir, &target_dir).await?;

    println!(
        "{} Rules replaced successfully ({})",
        "✓".green(),
        format!("v{}", version).cyan()
    );

    Ok(())
}
