use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cursor-rules")]
#[command(version)]
#[command(about = "CLI tool for managing .cursor rules in projects")]
#[command(long_about = "Installs the .cursor rule directories shipped with this package into \
the current project, and keeps them in sync with the package version through a \
.cursor-rules-version.json marker.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize .cursor rules in the project
    Init,

    /// Update .cursor rules to the latest version
    Update,

    /// Replace all .cursor rules with the latest version
    ReplaceAll,

    /// Show installed and available rule versions (read-only, changes nothing)
    Status,
}
