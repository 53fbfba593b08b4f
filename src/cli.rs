//! CLI argument parsing module for nugetnpm

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sync npm dependencies shipped inside NuGet packages into package.json
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nugetnpm",
    version,
    about = "Sync npm dependencies shipped inside NuGet packages into package.json"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge package.json dependencies from NuGet packages and run npm install
    Sync(SyncArgs),
}

/// Options for the sync subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct SyncArgs {
    /// Project file to analyse (default: the single .csproj/.fsproj/.vbproj in --dir)
    #[arg(long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Working directory holding the project and package.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// NuGet global packages folder (default: $NUGET_PACKAGES or ~/.nuget/packages)
    #[arg(long, value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Destination manifest, relative to --dir (default: package.json)
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Write package.json but do not run the installer
    #[arg(long)]
    pub no_install: bool,

    /// Show what would be written without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl SyncArgs {
    /// Whether the installer will be invoked
    pub fn wants_install(&self) -> bool {
        !self.no_install && !self.dry_run
    }
}
