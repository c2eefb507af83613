use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::manifest::MANIFEST_FILES;

/// Name of the version marker written into the target project
pub const VERSION_FILE_NAME: &str = ".cursor-rules-version.json";

/// Tag recorded in the `source` field of the version file
pub const RULES_SOURCE: &str = "cursor-rules";

/// Rule directories managed by the tool, relative to both package and target roots
pub const RULES_DIRS: [&str; 4] = [".cursor/rules", ".cursor/docs", ".cursor/commands", "user-rules"];

/// Entry names never copied out of the package
pub const EXCLUDE_FILES: [&str; 4] = [".DS_Store", "Thumbs.db", ".git", "node_modules"];

pub const PACKAGE_DIR_ENV: &str = "CURSOR_RULES_PACKAGE_DIR";
pub const LOG_LEVEL_ENV: &str = "CURSOR_RULES_LOG";

/// The set of directories and files a sync operates on.
///
/// Passed explicitly to the synchronizer, diff calculator and version store so
/// tests can substitute a smaller fixture set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    pub rule_dirs: Vec<PathBuf>,
    pub version_file_name: String,
    pub exclude: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rule_dirs: RULES_DIRS.into_iter().map(PathBuf::from).collect(),
            version_file_name: VERSION_FILE_NAME.to_string(),
            exclude: EXCLUDE_FILES.into_iter().map(String::from).collect(),
        }
    }
}

impl RulesConfig {
    /// Build a config managing only the given directories
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            rule_dirs: dirs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Path of the version file inside `target_dir`
    pub fn version_file_path(&self, target_dir: &Path) -> PathBuf {
        target_dir.join(&self.version_file_name)
    }
}

/// Tool settings loaded from the user config file and environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the rules package (holds the rule directories and the manifest)
    pub package_dir: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the user config file and environment variables.
    /// Environment variables take precedence over config file values.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Config::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// `<config dir>/cursor-rules/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cursor-rules").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from a key lookup (env vars take precedence)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(PACKAGE_DIR_ENV).filter(|v| !v.is_empty()) {
            self.package_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            self.log_level = Some(val);
        }
    }

    /// Resolve the rules package directory.
    ///
    /// An explicit setting wins. Otherwise the ancestors of the running
    /// executable are searched for the first one holding a package manifest.
    pub fn resolve_package_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.package_dir {
            return Ok(dir.clone());
        }

        let exe = env::current_exe().map_err(|_| Error::PackageDirNotFound)?;
        let start = exe.parent().ok_or(Error::PackageDirNotFound)?;
        find_package_root(start).ok_or(Error::PackageDirNotFound)
    }
}

/// First ancestor of `start` (inclusive) containing a package manifest
pub fn find_package_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| MANIFEST_FILES.iter().any(|name| dir.join(name).is_file()))
        .map(Path::to_path_buf)
}
