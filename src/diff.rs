use serde::Serialize;
use std::path::PathBuf;

use crate::config::RulesConfig;
use crate::error::{Error, Result};

/// Rule directories to add, delete or refresh when moving between versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionDiff {
    pub to_add: Vec<PathBuf>,
    pub to_delete: Vec<PathBuf>,
    pub to_update: Vec<PathBuf>,
}

impl VersionDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_delete.is_empty() && self.to_update.is_empty()
    }
}

/// Compute which rule directories need resyncing between two versions.
///
/// Resolution is whole directories: every managed directory is scheduled for
/// update regardless of the version delta. Callers may only rely on getting a
/// set of paths to resync, not on the set being minimal.
pub fn calculate(current: &str, target: &str, rules: &RulesConfig) -> Result<VersionDiff> {
    if current.is_empty() {
        return Err(Error::Diff("current"));
    }
    if target.is_empty() {
        return Err(Error::Diff("target"));
    }

    Ok(VersionDiff {
        to_add: Vec::new(),
        to_delete: Vec::new(),
        to_update: rules.rule_dirs.clone(),
    })
}
