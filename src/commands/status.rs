use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::{Config, RulesConfig};
use crate::fs::{FileSystem, TokioFs};
use crate::manifest::package_version;
use crate::version::{compare, ChangeType};
use crate::version_file::{read_version, VersionInfo};

/// Installed and available versions of the rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub installed: Option<VersionInfo>,
    pub package_version: String,
    /// Change an `update` would apply, `None` when not installed
    pub pending: Option<ChangeType>,
}

/// Inspect the target without modifying anything
pub async fn execute<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    package_dir: &Path,
    target_dir: &Path,
) -> crate::error::Result<Status> {
    super::require_dirs(package_dir, target_dir)?;

    let installed = read_version(fs, rules, target_dir).await;
    let package_version = package_version(fs, package_dir).await?;

    let pending = match &installed {
        Some(info) => Some(compare(&info.version, &package_version)?.change_type),
        None => None,
    };

    Ok(Status {
        installed,
        package_version,
        pending,
    })
}

/// Print the status of the current directory
pub async fn run(config: &Config) -> Result<()> {
    let (package_dir, target_dir) = super::resolve_dirs(config)?;
    let status = execute(&TokioFs, &RulesConfig::default(), &package_dir, &target_dir).await?;

    println!("  Package:   {}", package_dir.display());
    println!("  Available: {}", status.package_version.cyan());

    match (&status.installed, status.pending) {
        (Some(info), Some(change)) => {
            println!(
                "  Installed: {} ({})",
                info.version.cyan(),
                info.installed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
            );
            if change == ChangeType::None {
                println!("  {}", "up to date".green());
            } else {
                println!("  Pending:   {}", change.to_string().yellow());
                println!("Run {} to apply", "cursor-rules update".cyan());
            }
        }
        _ => {
            println!("  Installed: {}", "none".yellow());
            println!("Run {} to install", "cursor-rules init".cyan());
        }
    }

    Ok(())
}
