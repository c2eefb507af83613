//! Read and write the `.cursor-rules-version.json` marker in a target project.
//!
//! A marker that is missing, unreadable, not valid JSON, or fails validation
//! is reported as "not installed" rather than as an error, so a corrupted
//! marker can always be repaired by running `init` or `replace-all`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::{RulesConfig, RULES_SOURCE};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::version::is_valid_version;

/// Persisted record of the installed rules version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub installed_at: DateTime<Utc>,
    pub source: String,
    pub version: String,
}

impl VersionInfo {
    /// A record for `version` installed now
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            installed_at: Utc::now(),
            source: RULES_SOURCE.to_string(),
            version: version.into(),
        }
    }

    /// Check the fields serde cannot: non-empty source and a strict semver triple
    pub fn validate(&self) -> Result<()> {
        if self.source.is_empty() {
            return Err(Error::EmptySource);
        }
        if !is_valid_version(&self.version) {
            return Err(Error::InvalidVersion {
                role: "installed",
                value: self.version.clone(),
            });
        }
        Ok(())
    }
}

/// Read the version file from `target_dir`, or `None` if absent or malformed
pub async fn read_version<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    target_dir: &Path,
) -> Option<VersionInfo> {
    let path = rules.version_file_path(target_dir);

    if !fs.exists(&path).await {
        debug!(path = %path.display(), "No version file");
        return None;
    }

    let content = match fs.read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable version file, treating as not installed");
            return None;
        }
    };

    let info: VersionInfo = match serde_json::from_str(&content) {
        Ok(info) => info,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Malformed version file, treating as not installed");
            return None;
        }
    };

    if let Err(e) = info.validate() {
        warn!(path = %path.display(), error = %e, "Invalid version file, treating as not installed");
        return None;
    }

    Some(info)
}

/// Write `info` as pretty-printed JSON to the version file in `target_dir`.
///
/// A record that would not read back (see [`VersionInfo::validate`]) is
/// rejected before anything is written.
pub async fn write_version<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    target_dir: &Path,
    info: &VersionInfo,
) -> Result<()> {
    if target_dir.as_os_str().is_empty() {
        return Err(Error::MissingArgument("targetDir"));
    }

    info.validate()?;

    let path = rules.version_file_path(target_dir);
    let content = serde_json::to_string_pretty(info)?;

    fs.write(&path, &content)
        .await
        .map_err(|source| Error::VersionWrite {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), version = %info.version, "Wrote version file");
    Ok(())
}

/// Installed version string, if any
pub async fn current_version<F: FileSystem + ?Sized>(
    fs: &F,
    rules: &RulesConfig,
    target_dir: &Path,
) -> Option<String> {
    read_version(fs, rules, target_dir)
        .await
        .map(|info| info.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionInfo {
        VersionInfo {
            installed_at: "2025-11-01T12:00:00.000Z".parse().unwrap(),
            source: "cursor-rules".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string_pretty(&sample()).unwrap();
        assert!(json.contains("\"installedAt\""));
        assert!(json.contains("\"source\": \"cursor-rules\""));
        assert!(json.contains("\"version\": \"1.0.0\""));
        assert!(json.contains("\n  \"version\""), "expected 2-space indentation");
    }

    #[test]
    fn test_parses_js_style_timestamp() {
        let json = r#"{"installedAt":"2025-11-01T12:00:00.000Z","source":"cursor-rules","version":"1.0.0"}"#;
        let info: VersionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info, sample());
    }

    #[test]
    fn test_rejects_invalid_date() {
        let json = r#"{"installedAt":"invalid-date","source":"cursor-rules","version":"1.0.0"}"#;
        assert!(serde_json::from_str::<VersionInfo>(json).is_err());
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(serde_json::from_str::<VersionInfo>(r#"{"version":"1.0.0"}"#).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut empty_source = sample();
        empty_source.source.clear();
        assert!(matches!(empty_source.validate(), Err(Error::EmptySource)));

        let mut short_version = sample();
        short_version.version = "1.0".to_string();
        assert!(matches!(
            short_version.validate(),
            Err(Error::InvalidVersion { role: "installed", .. })
        ));
    }

    #[test]
    fn test_new_uses_rules_source() {
        let info = VersionInfo::new("2.0.0");
        assert_eq!(info.source, RULES_SOURCE);
        assert_eq!(info.version, "2.0.0");
        assert!(Utc::now() - info.installed_at < chrono::Duration::seconds(5));
    }
}
