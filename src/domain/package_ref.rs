//! Resolved NuGet package references

use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolved package of the primary project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageReference {
    /// Package id as reported by the build tool
    pub name: String,
    /// Resolved version
    pub version: String,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Label used to attribute extracted dependencies to this package
    pub fn source_label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
