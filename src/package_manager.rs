//! npm integration for installing merged dependencies
//!
//! This module provides:
//! - Detection of the installer binary
//! - Execution of the install command with inherited stdio

use crate::error::ToolError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default installer program
pub const DEFAULT_INSTALLER: &str = "npm";

/// Trait for running the package installer
pub trait Installer {
    /// Program name, for messages
    fn program(&self) -> &str;

    /// Returns true if the installer can be launched
    fn is_available(&self) -> bool;

    /// Run the install command in `working_dir` and return its exit code
    fn run_install(&self, working_dir: &Path) -> Result<i32, ToolError>;
}

/// Installer that executes a real program (npm by default)
#[derive(Debug, Clone)]
pub struct SystemInstaller {
    program: String,
}

impl SystemInstaller {
    /// Create an installer for the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALLER)
    }
}

impl Installer for SystemInstaller {
    fn program(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run_install(&self, working_dir: &Path) -> Result<i32, ToolError> {
        let status = Command::new(&self.program)
            .arg("install")
            .current_dir(working_dir)
            .status()
            .map_err(|e| ToolError::InstallerFailed {
                program: self.program.clone(),
                source: e,
            })?;

        // No code means the process was terminated by a signal
        Ok(status.code().unwrap_or(1))
    }
}

/// Convert an installer exit code into a process exit status byte
pub fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
