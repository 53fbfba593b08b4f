//! Version conflict reports produced by the merge engine

use serde::{Deserialize, Serialize};

/// A (source, version) pair that requested a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSource {
    /// Label of the contributing package
    pub source: String,
    /// Specifier it requested
    pub version: String,
}

impl ConflictSource {
    pub fn new(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
        }
    }
}

/// Warning for one dependency whose sources disagree on the specifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    /// Dependency name
    pub package: String,
    /// Whether the conflict is in `devDependencies`
    pub is_dev: bool,
    /// Distinct (source, version) pairs in first-seen order
    pub sources: Vec<ConflictSource>,
    /// Specifier that was written: always the last one seen
    pub used_version: String,
}

impl ConflictWarning {
    /// Renders the warning as a single human-readable line
    pub fn message(&self) -> String {
        let requested = self
            .sources
            .iter()
            .map(|s| format!("{} wants {}", s.source, s.version))
            .collect::<Vec<_>>()
            .join(", ");
        let section = if self.is_dev { " (dev)" } else { "" };
        format!(
            "Version conflict for {}{}: {} → using {}",
            self.package, section, requested, self.used_version
        )
    }
}
