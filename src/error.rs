//! Error types for cursor-rules

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is required")]
    MissingArgument(&'static str),

    #[error("Rules already initialized with version {0}")]
    AlreadyInitialized(String),

    #[error("Rules not initialized. Run init command first.")]
    NotInitialized,

    #[error("Invalid {role} version format: {value:?}")]
    InvalidVersion { role: &'static str, value: String },

    #[error("Version file source cannot be empty")]
    EmptySource,

    #[error("{0} version is required to calculate a diff")]
    Diff(&'static str),

    #[error("Failed to write version file {path}")]
    VersionWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read package version from {path}: {message}")]
    PackageVersion { path: PathBuf, message: String },

    #[error("Failed to copy {from} to {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not locate the rules package directory. Set CURSOR_RULES_PACKAGE_DIR.")]
    PackageDirNotFound,

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
