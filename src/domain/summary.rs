//! Sync result summary types
//!
//! Provides structures for tracking what each scanned package contributed
//! and what the overall run did.

use super::{ConflictWarning, ManifestChange, PackageReference};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Reason a package contributed no dependency records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "message", rename_all = "snake_case")]
pub enum SkipReason {
    /// No package.json shipped in the package (not an error)
    NotFound,
    /// The file exists but could not be read
    Unreadable(String),
    /// The file is empty or whitespace only
    Empty,
    /// The file is not a valid manifest
    Invalid(String),
}

impl SkipReason {
    /// Returns true if this skip should be surfaced to the user as a warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, SkipReason::NotFound)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "no package.json"),
            SkipReason::Unreadable(msg) => write!(f, "unreadable: {}", msg),
            SkipReason::Empty => write!(f, "empty package.json"),
            SkipReason::Invalid(msg) => write!(f, "invalid package.json: {}", msg),
        }
    }
}

/// What one resolved package contributed to the merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    /// The package that was scanned
    pub reference: PackageReference,
    /// Location of its package.json, if one was found
    pub manifest_path: Option<PathBuf>,
    /// Number of `dependencies` records extracted
    pub runtime_count: usize,
    /// Number of `devDependencies` records extracted
    pub dev_count: usize,
    /// Why nothing was extracted, if applicable
    pub skipped: Option<SkipReason>,
}

impl SourceReport {
    /// Report for a package whose manifest was extracted
    pub fn extracted(
        reference: PackageReference,
        manifest_path: impl Into<PathBuf>,
        runtime_count: usize,
        dev_count: usize,
    ) -> Self {
        Self {
            reference,
            manifest_path: Some(manifest_path.into()),
            runtime_count,
            dev_count,
            skipped: None,
        }
    }

    /// Report for a package that contributed nothing
    pub fn skipped(
        reference: PackageReference,
        manifest_path: Option<PathBuf>,
        reason: SkipReason,
    ) -> Self {
        Self {
            reference,
            manifest_path,
            runtime_count: 0,
            dev_count: 0,
            skipped: Some(reason),
        }
    }

    /// Total records contributed
    pub fn total(&self) -> usize {
        self.runtime_count + self.dev_count
    }

    /// Returns true if this package contributed at least one record
    pub fn contributed(&self) -> bool {
        self.total() > 0
    }
}

/// Overall result of one sync run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// The primary project descriptor that was analysed
    pub descriptor: PathBuf,
    /// The destination manifest
    pub manifest: PathBuf,
    /// One report per resolved package, in reference order
    pub sources: Vec<SourceReport>,
    /// Version conflicts detected during merge
    pub conflicts: Vec<ConflictWarning>,
    /// Number of (name, bucket) entries written into the manifest
    pub merged: usize,
    /// Entries whose value the merge adds or rewrites
    pub changes: Vec<ManifestChange>,
    /// Rendered manifest, kept in dry-run mode instead of being written
    pub preview: Option<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Whether the manifest file was written
    pub manifest_written: bool,
}

impl SyncSummary {
    /// Creates an empty summary
    pub fn new(descriptor: impl Into<PathBuf>, manifest: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            descriptor: descriptor.into(),
            manifest: manifest.into(),
            sources: Vec::new(),
            conflicts: Vec::new(),
            merged: 0,
            changes: Vec::new(),
            preview: None,
            dry_run,
            manifest_written: false,
        }
    }

    /// Adds a source report
    pub fn add_source(&mut self, report: SourceReport) {
        self.sources.push(report);
    }

    /// Sources that contributed records
    pub fn contributing(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|s| s.contributed())
    }

    /// Sources that were skipped for a reason worth reporting
    pub fn warnings(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources
            .iter()
            .filter(|s| s.skipped.as_ref().is_some_and(SkipReason::is_warning))
    }

    /// Total number of records extracted across all sources
    pub fn total_records(&self) -> usize {
        self.sources.iter().map(SourceReport::total).sum()
    }

    /// Returns true if any version conflicts were detected
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
