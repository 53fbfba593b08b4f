//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Reading, parsing and writing package.json files
//! - ProjectError: Locating the .NET project descriptor
//! - ToolError: Running the external build tool and installer
//! - ConfigError: Issues with configuration and CLI options

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Project descriptor related errors
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// External tool related errors
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package.json shipped inside a package could not be parsed
    #[error("failed to parse package.json from {label}: {message}")]
    SecondaryParseError { label: String, message: String },
}

/// Errors related to locating the primary project
#[derive(Error, Debug)]
pub enum ProjectError {
    /// No project file found
    #[error("no project file (.csproj, .fsproj, .vbproj) found in {dir}")]
    NotFound { dir: PathBuf },

    /// Explicit project path does not exist
    #[error("project file not found: {path}")]
    MissingFile { path: PathBuf },

    /// More than one project file found
    #[error("multiple project files found in {dir}: {}; use --project to pick one", .candidates.join(", "))]
    Ambiguous {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    /// Directory could not be listed
    #[error("failed to read directory {dir}: {source}")]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to external processes
#[derive(Error, Debug)]
pub enum ToolError {
    /// Installer binary is not available on PATH
    #[error("'{program}' was not found; install it or add it to PATH")]
    InstallerMissing { program: String },

    /// Installer could not be launched
    #[error("failed to run '{program} install': {source}")]
    InstallerFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The build tool could not list package references
    #[error("'{command}' failed: {message}")]
    BuildToolFailed { command: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read or parsed
    #[error("invalid configuration file {path}: {message}")]
    InvalidConfigFile { path: PathBuf, message: String },

    /// NuGet packages folder could not be determined
    #[error("cannot determine NuGet packages folder; set NUGET_PACKAGES or pass --packages-dir")]
    PackagesRootUnknown,
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new SecondaryParseError
    pub fn secondary_parse_error(label: impl Into<String>, message: impl Into<String>) -> Self {
        ManifestError::SecondaryParseError {
            label: label.into(),
            message: message.into(),
        }
    }
}

impl ProjectError {
    /// Creates a new NotFound error
    pub fn not_found(dir: impl Into<PathBuf>) -> Self {
        ProjectError::NotFound { dir: dir.into() }
    }

    /// Creates a new Ambiguous error
    pub fn ambiguous(dir: impl Into<PathBuf>, candidates: Vec<String>) -> Self {
        ProjectError::Ambiguous {
            dir: dir.into(),
            candidates,
        }
    }
}

impl ToolError {
    /// Creates a new InstallerMissing error
    pub fn installer_missing(program: impl Into<String>) -> Self {
        ToolError::InstallerMissing {
            program: program.into(),
        }
    }

    /// Creates a new BuildToolFailed error
    pub fn build_tool_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        ToolError::BuildToolFailed {
            command: command.into(),
            message: message.into(),
        }
    }
}
