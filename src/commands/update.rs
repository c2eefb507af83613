use anyhow::Result;
use colored::*;
use std::path::Path;
use tracing::{info, warn};

use crate::config::{Config, RulesConfig};
use crate::diff;
use crate::error::Error;
use crate::fs::{FileSystem, TokioFs};
use crate::manifest::package_version;
use crate::sync::RulesSync;
use crate::version::{compare, ChangeType, VersionComparison};
use crate::version_file::{current_version, write_version, VersionInfo};

/// Result of an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Installed version already matches the package; nothing was touched
    UpToDate(String),
    /// Rules were resynced to the package version
    Updated(VersionComparison),
}

/// Bring installed rules up to the package version.
///
/// When the versions are equal no filesystem writes happen. A package older
/// than the installed rules is still applied.
pub async fn execute<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    package_dir: &Path,
    target_dir: &Path,
) -> crate::error::Result<UpdateOutcome> {
    super::require_dirs(package_dir, target_dir)?;

    let current = current_version(fs, rules, target_dir)
        .await
        .ok_or(Error::NotInitialized)?;
    let target = package_version(fs, package_dir).await?;

    let comparison = compare(&current, &target)?;
    if !comparison.is_change() {
        info!(version = %current, "Rules already up to date");
        return Ok(UpdateOutcome::UpToDate(current));
    }
    if comparison.change_type == ChangeType::Downgrade {
        warn!(%current, %target, "Package is older than installed rules, downgrading");
    }

    // Whole-directory resync for now; the diff only decides what to log.
    let plan = diff::calculate(&current, &target, rules)?;
    info!(change = %comparison.change_type, dirs = plan.to_update.len(), "Updating rules");

    RulesSync::new(fs, rules).copy_all(package_dir, target_dir).await?;
    write_version(fs, rules, target_dir, &VersionInfo::new(&target)).await?;

    Ok(UpdateOutcome::Updated(comparison))
}

/// Run the update command in the current directory
pub async fn run(config: &Config) -> Result<()> {
    let (package_dir, target_dir) = super::resolve_dirs(config)?;

    match execute(&TokioFs, &RulesConfig::default(), &package_dir, &target_dir).await? {
        UpdateOutcome::UpToDate(version) => {
            println!(
                "{} Rules already up to date ({})",
                "✓".green(),
                format!("v{}", version).cyan()
            );
        }
        UpdateOutcome::Updated(comparison) => {
            println!(
                "{} Rules updated successfully ({} → {}, {})",
                "✓".green(),
                comparison.current.yellow(),
                comparison.target.green(),
                comparison.change_type
            );
        }
    }

    Ok(())
}
