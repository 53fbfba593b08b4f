//! Run configuration
//!
//! Settings are resolved in priority order:
//! 1. CLI flags
//! 2. `nugetnpm.toml` in the working directory
//! 3. Environment (`NUGET_PACKAGES`, `HOME`, `USERPROFILE`)
//! 4. Built-in defaults

use crate::cli::SyncArgs;
use crate::error::ConfigError;
use crate::manifest::NPM_MANIFEST;
use crate::package_manager::DEFAULT_INSTALLER;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional project configuration file
pub const CONFIG_FILE: &str = "nugetnpm.toml";

/// Contents of `nugetnpm.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Destination manifest, relative to the working directory
    pub manifest: Option<PathBuf>,
    /// NuGet global packages folder
    pub packages_dir: Option<PathBuf>,
    /// Installer program
    pub installer: Option<String>,
    /// Whether to run the installer after writing
    pub install: Option<bool>,
}

impl FileConfig {
    /// Read `nugetnpm.toml` from a directory
    ///
    /// A missing file yields the default configuration.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::InvalidConfigFile {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|message| ConfigError::InvalidConfigFile { path, message })
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

/// Fully resolved settings for one sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Working directory
    pub working_dir: PathBuf,
    /// Explicit project file, if given
    pub project: Option<PathBuf>,
    /// Destination manifest path
    pub manifest_path: PathBuf,
    /// NuGet global packages folder
    pub packages_root: PathBuf,
    /// Installer program
    pub installer: String,
    /// Whether to run the installer
    pub install: bool,
    /// Dry-run mode
    pub dry_run: bool,
}

impl SyncConfig {
    /// Resolve settings from CLI args, the config file and the process environment
    pub fn resolve(args: &SyncArgs) -> Result<Self, ConfigError> {
        let file = FileConfig::from_dir(&args.dir)?;
        Self::from_parts(args, file, |key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Resolve settings with an explicit environment lookup
    pub fn from_parts(
        args: &SyncArgs,
        file: FileConfig,
        env: impl Fn(&str) -> Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let manifest = args
            .manifest
            .clone()
            .or(file.manifest)
            .unwrap_or_else(|| PathBuf::from(NPM_MANIFEST));

        // Relative paths in the file are relative to the working directory
        let file_packages = file.packages_dir.map(|dir| args.dir.join(dir));
        let packages_root = match args.packages_dir.clone().or(file_packages) {
            Some(dir) => dir,
            None => default_packages_root(&env).ok_or(ConfigError::PackagesRootUnknown)?,
        };

        let install = file.install.unwrap_or(true) && args.wants_install();

        Ok(Self {
            working_dir: args.dir.clone(),
            project: args.project.clone(),
            manifest_path: args.dir.join(manifest),
            packages_root,
            installer: file
                .installer
                .unwrap_or_else(|| DEFAULT_INSTALLER.to_string()),
            install,
            dry_run: args.dry_run,
        })
    }
}

/// NuGet's global packages folder from the environment
fn default_packages_root(env: &impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = env("NUGET_PACKAGES").filter(|p| !p.as_os_str().is_empty()) {
        return Some(dir);
    }
    env("HOME")
        .or_else(|| env("USERPROFILE"))
        .filter(|p| !p.as_os_str().is_empty())
        .map(|home| home.join(".nuget").join("packages"))
}
