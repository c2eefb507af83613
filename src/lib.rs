//! cursor-rules - install and update .cursor rule directories in a project
//!
//! This library provides the core functionality for the `cursor-rules` CLI tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod sync;
pub mod version;
pub mod version_file;

pub use config::{Config, RulesConfig};
pub use error::{Error, Result};
pub use fs::{FileSystem, TokioFs};
