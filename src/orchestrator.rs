//! Sync orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: check → locate → list → scan → merge → write → install
//! - Fatal checks that run before the destination manifest is touched
//! - Per-package error absorption: a broken package.json only skips that package
//! - Dry-run mode support

use crate::config::SyncConfig;
use crate::domain::{DependencyRecord, PackageReference, SkipReason, SourceReport, SyncSummary};
use crate::error::{AppError, ManifestError, ToolError};
use crate::manifest::{self, find_secondary_manifest, strip_bom};
use crate::merge::merge;
use crate::package_manager::{Installer, SystemInstaller};
use crate::progress::Progress;
use crate::project::{list_resolved_references, resolve_descriptor, BuildTool, DotnetCli};
use std::fs;

/// Orchestrator for one sync run
pub struct Orchestrator {
    /// Resolved configuration
    config: SyncConfig,
    /// Lists the project's resolved packages
    build_tool: Box<dyn BuildTool>,
    /// Installs the merged dependencies
    installer: Box<dyn Installer>,
    /// Whether to show spinners
    show_progress: bool,
}

/// Result of a successful sync
#[derive(Debug)]
pub struct SyncOutcome {
    /// What was scanned, merged and written
    pub summary: SyncSummary,
    /// Diagnostic notes, shown in verbose mode
    pub notes: Vec<String>,
}

impl Orchestrator {
    /// Create an orchestrator using `dotnet` and the configured installer
    pub fn new(config: SyncConfig) -> Self {
        let installer = SystemInstaller::new(config.installer.clone());
        Self::with_tools(config, Box::new(DotnetCli::new()), Box::new(installer))
    }

    /// Create an orchestrator with custom tools (for testing)
    pub fn with_tools(
        config: SyncConfig,
        build_tool: Box<dyn BuildTool>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            config,
            build_tool,
            installer,
            show_progress: false,
        }
    }

    /// Enable or disable progress spinners
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The configuration this orchestrator runs with
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Scan packages and merge their dependencies into the destination manifest
    ///
    /// Fails before reading or writing the manifest if the installer is
    /// missing, the project cannot be located or the build tool fails.
    pub fn sync(&self) -> Result<SyncOutcome, AppError> {
        let mut progress = Progress::new(self.show_progress);
        let mut notes = Vec::new();

        // Step 1: Fatal pre-merge checks
        if self.config.install && !self.installer.is_available() {
            return Err(ToolError::installer_missing(self.installer.program()).into());
        }

        let descriptor =
            resolve_descriptor(self.config.project.as_deref(), &self.config.working_dir)?;
        notes.push(format!("Using project {}", descriptor.display()));

        progress.spinner("Listing package references...");
        let references = list_resolved_references(self.build_tool.as_ref(), &descriptor);
        progress.finish_and_clear();
        let references = references?;
        notes.push(format!("{} resolved package(s)", references.len()));

        // Step 2: Extract dependencies from every package that ships a package.json
        let mut summary = SyncSummary::new(
            &descriptor,
            &self.config.manifest_path,
            self.config.dry_run,
        );
        let mut records = Vec::new();

        progress.start(references.len() as u64, "Scanning packages");
        for reference in references {
            progress.set_message(&format!("Scanning {}", reference.name));
            let (report, mut extracted) = self.scan_source(reference);
            match &report.skipped {
                Some(reason) if reason.is_warning() => {
                    notes.push(format!("Skipped {}: {}", report.reference, reason))
                }
                Some(_) => notes.push(format!("No package.json in {}", report.reference)),
                None => notes.extend(extracted.iter().map(|record| record.to_string())),
            }
            records.append(&mut extracted);
            summary.add_source(report);
            progress.inc();
        }
        progress.finish_and_clear();

        // Step 3: Merge into the destination manifest
        let mut doc = manifest::load(&self.config.manifest_path);
        let outcome = merge(&mut doc, &records);
        summary.merged = outcome.written;
        summary.conflicts = outcome.warnings;
        summary.changes = outcome.changes;

        // Step 4: Write, or keep the rendered document for a dry-run
        if self.config.dry_run {
            summary.preview = Some(doc.render());
        } else {
            manifest::save(&self.config.manifest_path, &doc)?;
            summary.manifest_written = true;
            notes.extend(summary.changes.iter().map(|change| change.to_string()));
        }

        Ok(SyncOutcome { summary, notes })
    }

    /// Run the installer if configured to
    ///
    /// Returns the installer's exit code, or `None` if installation is disabled.
    pub fn install(&self) -> Result<Option<i32>, AppError> {
        if !self.config.install {
            return Ok(None);
        }
        let code = self.installer.run_install(&self.config.working_dir)?;
        Ok(Some(code))
    }

    /// Locate, read and extract one package's package.json
    fn scan_source(&self, reference: PackageReference) -> (SourceReport, Vec<DependencyRecord>) {
        let Some(path) = find_secondary_manifest(&self.config.packages_root, &reference) else {
            return (
                SourceReport::skipped(reference, None, SkipReason::NotFound),
                Vec::new(),
            );
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                let message = ManifestError::read_error(&path, e).to_string();
                return (
                    SourceReport::skipped(reference, Some(path), SkipReason::Unreadable(message)),
                    Vec::new(),
                );
            }
        };

        if strip_bom(&content).trim().is_empty() {
            return (
                SourceReport::skipped(reference, Some(path), SkipReason::Empty),
                Vec::new(),
            );
        }

        match manifest::extract(&reference.source_label(), &content) {
            Ok(records) => {
                let dev_count = records.iter().filter(|r| r.is_dev).count();
                let runtime_count = records.len() - dev_count;
                (
                    SourceReport::extracted(reference, path, runtime_count, dev_count),
                    records,
                )
            }
            Err(e) => (
                SourceReport::skipped(reference, Some(path), SkipReason::Invalid(e.to_string())),
                Vec::new(),
            ),
        }
    }
}
