//! Entries the merge adds or rewrites in the destination manifest

use super::DependencyKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `dependencies`/`devDependencies` entry whose value changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestChange {
    /// Dependency name
    pub name: String,
    /// Section the entry lives in
    pub kind: DependencyKind,
    /// Previous specifier, `None` if the entry is new
    pub from: Option<String>,
    /// Specifier written
    pub to: String,
}

impl ManifestChange {
    pub fn new(
        name: impl Into<String>,
        kind: DependencyKind,
        from: Option<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            from,
            to: to.into(),
        }
    }
}

impl fmt::Display for ManifestChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(f, "{}.{}: {} → {}", self.kind.section(), self.name, from, self.to),
            None => write!(f, "{}.{}: + {}", self.kind.section(), self.name, self.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_addition() {
        let change = ManifestChange::new("react", DependencyKind::Runtime, None, "^18.0.0");
        assert!(change.from.is_none());
        assert_eq!(change.to_string(), "dependencies.react: + ^18.0.0");
    }

    #[test]
    fn test_display_update() {
        let change = ManifestChange::new(
            "typescript",
            DependencyKind::Development,
            Some("^4.0.0".to_string()),
            "^5.0.0",
        );
        assert_eq!(change.to_string(), "devDependencies.typescript: ^4.0.0 → ^5.0.0");
    }
}
