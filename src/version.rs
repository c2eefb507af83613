use regex::Regex;
use semver::Version;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("valid version regex"));

/// Kind of change between the installed rules and the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Major,
    Minor,
    Patch,
    None,
    /// Package version is older than the installed one
    Downgrade,
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeType::Major => write!(f, "major"),
            ChangeType::Minor => write!(f, "minor"),
            ChangeType::Patch => write!(f, "patch"),
            ChangeType::None => write!(f, "none"),
            ChangeType::Downgrade => write!(f, "downgrade"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionComparison {
    pub current: String,
    pub target: String,
    pub change_type: ChangeType,
}

impl VersionComparison {
    pub fn is_change(&self) -> bool {
        self.change_type != ChangeType::None
    }
}

/// True if `value` is a strict `major.minor.patch` triple
pub fn is_valid_version(value: &str) -> bool {
    VERSION_PATTERN.is_match(value)
}

/// Parse a strict `major.minor.patch` string.
///
/// Pre-release and build metadata are rejected, leading zeros are accepted.
fn parse(value: &str, role: &'static str) -> Result<Version> {
    let invalid = || Error::InvalidVersion {
        role,
        value: value.to_string(),
    };

    let caps = VERSION_PATTERN.captures(value).ok_or_else(invalid)?;
    let component = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Compare the installed version against the package version.
///
/// The first differing component decides the change type.
pub fn compare(current: &str, target: &str) -> Result<VersionComparison> {
    let current_version = parse(current, "current")?;
    let target_version = parse(target, "target")?;

    let change_type = if target_version < current_version {
        ChangeType::Downgrade
    } else if target_version.major > current_version.major {
        ChangeType::Major
    } else if target_version.minor > current_version.minor {
        ChangeType::Minor
    } else if target_version.patch > current_version.patch {
        ChangeType::Patch
    } else {
        ChangeType::None
    };

    Ok(VersionComparison {
        current: current.to_string(),
        target: target.to_string(),
        change_type,
    })
}
