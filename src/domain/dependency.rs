//! Dependency requirement records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which section of a manifest a dependency belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// `dependencies`
    Runtime,
    /// `devDependencies`
    Development,
}

impl DependencyKind {
    /// Returns the manifest section name for this kind
    pub fn section(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }

    /// Returns both kinds in extraction order
    pub fn all() -> &'static [DependencyKind] {
        &[DependencyKind::Runtime, DependencyKind::Development]
    }

    /// Returns true for the development bucket
    pub fn is_dev(&self) -> bool {
        matches!(self, DependencyKind::Development)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section())
    }
}

/// One dependency requirement extracted from one secondary manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Package name, verbatim (may be scoped, e.g. `@scope/name`)
    pub name: String,
    /// Version specifier, verbatim. Never parsed.
    pub version_spec: String,
    /// Label of the package that contributed this requirement
    pub source: String,
    /// Whether the requirement came from `devDependencies`
    pub is_dev: bool,
}

impl DependencyRecord {
    /// Creates a new record
    pub fn new(
        name: impl Into<String>,
        version_spec: impl Into<String>,
        source: impl Into<String>,
        is_dev: bool,
    ) -> Self {
        Self {
            name: name.into(),
            version_spec: version_spec.into(),
            source: source.into(),
            is_dev,
        }
    }

    /// Creates a runtime (`dependencies`) record
    pub fn runtime(
        name: impl Into<String>,
        version_spec: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::new(name, version_spec, source, false)
    }

    /// Creates a development (`devDependencies`) record
    pub fn development(
        name: impl Into<String>,
        version_spec: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::new(name, version_spec, source, true)
    }

    /// Returns the bucket this record belongs to
    pub fn kind(&self) -> DependencyKind {
        if self.is_dev {
            DependencyKind::Development
        } else {
            DependencyKind::Runtime
        }
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} (from {})", self.name, self.version_spec, self.source)?;
        if self.is_dev {
            write!(f, " [dev]")?;
        }
        Ok(())
    }
}
