//! Core domain models for nugetnpm
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records extracted from package manifests
//! - Conflict warnings and entry changes produced by the merge
//! - Resolved package references of the primary project
//! - Per-source and overall sync summaries

mod change;
mod conflict;
mod dependency;
mod package_ref;
mod summary;

pub use change::ManifestChange;
pub use conflict::{ConflictSource, ConflictWarning};
pub use dependency::{DependencyKind, DependencyRecord};
pub use package_ref::PackageReference;
pub use summary::{SkipReason, SourceReport, SyncSummary};
