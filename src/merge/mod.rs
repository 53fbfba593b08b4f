//! Dependency merge engine
//!
//! This module provides:
//! - Grouping of extracted records by (name, bucket) in first-seen order
//! - Last-write-wins resolution, with no version comparison of any kind
//! - Conflict warnings for groups whose sources disagree
//! - A record of every entry whose value changes

mod group;

use group::group_records;

use crate::domain::{ConflictWarning, DependencyRecord, ManifestChange};
use crate::manifest::ManifestDocument;
use serde_json::Value;

/// Result of merging records into a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Conflicts in the order their groups were first seen
    pub warnings: Vec<ConflictWarning>,
    /// Number of (name, bucket) entries written
    pub written: usize,
    /// Entries added or given a different specifier, in write order
    pub changes: Vec<ManifestChange>,
}

/// Merge extracted records into the destination document
///
/// For every (name, bucket) group the specifier of its last record is
/// written into `dependencies` or `devDependencies`. A section is created
/// only when something is written to it. Keys not named by any record are
/// left untouched, and an existing value for a named key is overwritten in
/// place rather than treated as another source.
pub fn merge(doc: &mut ManifestDocument, records: &[DependencyRecord]) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for group in group_records(records) {
        let version = group.winning_version();

        let previous = doc
            .get_or_create_section(group.kind.section())
            .insert(group.name.to_string(), Value::String(version.to_string()));
        outcome.written += 1;

        let from = previous.map(|value| match value {
            Value::String(text) => text,
            other => other.to_string(),
        });
        if from.as_deref() != Some(version) {
            outcome
                .changes
                .push(ManifestChange::new(group.name, group.kind, from, version));
        }

        if group.is_conflicted() {
            outcome.warnings.push(ConflictWarning {
                package: group.name.to_string(),
                is_dev: group.kind.is_dev(),
                sources: group.distinct_sources(),
                used_version: version.to_string(),
            });
        }
    }

    outcome
}
