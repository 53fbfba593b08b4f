//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per package that contributed dependencies
//! - Warnings for packages whose package.json could not be used
//! - Version conflict warnings with the version that was kept
//! - In dry-run mode, the entries that would change (and the whole
//!   document when verbose)
//! - A closing summary line

use crate::domain::{ConflictWarning, ManifestChange, SourceReport, SyncSummary};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn dry_run_prefix(&self, dry_run: bool) -> String {
        match (dry_run, self.color) {
            (false, _) => String::new(),
            (true, true) => format!("{} ", "(dry-run)".cyan()),
            (true, false) => "(dry-run) ".to_string(),
        }
    }

    fn warning_marker(&self) -> String {
        if self.color {
            "⚠".yellow().bold().to_string()
        } else {
            "⚠".to_string()
        }
    }

    fn count(count: usize, singular: &str, plural: &str) -> String {
        if count == 1 {
            format!("{} {}", count, singular)
        } else {
            format!("{} {}", count, plural)
        }
    }

    /// Format a line for a package that contributed records
    fn format_source_line(
        &self,
        report: &SourceReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let mut counts = Self::count(report.runtime_count, "dependency", "dependencies");
        if report.dev_count > 0 {
            counts.push_str(&format!(", {} dev", report.dev_count));
        }

        if self.color {
            writeln!(
                writer,
                "  {} {} {}: {}",
                "✓".green(),
                report.reference.name.bold(),
                report.reference.version.dimmed(),
                counts
            )
        } else {
            writeln!(
                writer,
                "  ✓ {} {}: {}",
                report.reference.name, report.reference.version, counts
            )
        }
    }

    /// Format a line for a package that was skipped
    fn format_skip_line(
        &self,
        report: &SourceReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let reason = report
            .skipped
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default();
        if self.color {
            writeln!(
                writer,
                "  {} Skipped {}: {}",
                self.warning_marker(),
                report.reference,
                reason.dimmed()
            )
        } else {
            writeln!(writer, "  ⚠ Skipped {}: {}", report.reference, reason)
        }
    }

    /// Format a version conflict warning
    fn format_conflict(
        &self,
        conflict: &ConflictWarning,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let section = if conflict.is_dev { " (dev)" } else { "" };
        if self.color {
            let requested = conflict
                .sources
                .iter()
                .map(|s| format!("{} wants {}", s.source, s.version.yellow()))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                writer,
                "  {} Version conflict for {}{}: {} → using {}",
                self.warning_marker(),
                conflict.package.bold(),
                section,
                requested,
                conflict.used_version.bright_white().bold()
            )
        } else {
            writeln!(writer, "  ⚠ {}", conflict.message())
        }
    }

    /// Format the entries a dry-run would write, diff style
    fn format_changes(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if summary.changes.is_empty() {
            return Ok(());
        }

        let prefix = self.dry_run_prefix(summary.dry_run);
        let path = summary.manifest.display();
        writeln!(writer, "{}--- a/{}", prefix, path)?;
        writeln!(writer, "{}+++ b/{}", prefix, path)?;
        for change in &summary.changes {
            self.format_change(change, writer)?;
        }
        writeln!(writer)
    }

    fn format_change(&self, change: &ManifestChange, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "@@ {}.{} @@", change.kind.section(), change.name)?;
        if let Some(from) = &change.from {
            let line = format!("-  \"{}\": \"{}\"", change.name, from);
            if self.color {
                writeln!(writer, "{}", line.red())?;
            } else {
                writeln!(writer, "{}", line)?;
            }
        }
        let line = format!("+  \"{}\": \"{}\"", change.name, change.to);
        if self.color {
            writeln!(writer, "{}", line.green())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Format the closing line
    fn format_footer(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix(summary.dry_run);
        let contributing = summary.contributing().count();
        let target = summary.manifest.display();

        if summary.merged == 0 {
            return writeln!(writer, "{}No npm dependencies found in NuGet packages", prefix);
        }

        let verb = if summary.dry_run { "Would merge" } else { "Merged" };
        let line = format!(
            "{}{} {} into {} from {}",
            prefix,
            verb,
            Self::count(summary.merged, "entry", "entries"),
            target,
            Self::count(contributing, "package", "packages")
        );
        if self.color {
            writeln!(writer, "{}", line.bold())
        } else {
            writeln!(writer, "{}", line)
        }?;

        if summary.has_conflicts() {
            let line = format!(
                "{} resolved by last write",
                Self::count(
                    summary.conflicts.len(),
                    "version conflict",
                    "version conflicts"
                )
            );
            if self.color {
                writeln!(writer, "{}", line.yellow())?;
            } else {
                writeln!(writer, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for report in summary.contributing() {
                self.format_source_line(report, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            for report in summary.sources.iter().filter(|s| {
                s.skipped
                    .as_ref()
                    .is_some_and(|reason| !reason.is_warning())
            }) {
                writeln!(writer, "  · {}: no package.json", report.reference)?;
            }
        }

        for report in summary.warnings() {
            self.format_skip_line(report, writer)?;
        }

        for conflict in &summary.conflicts {
            self.format_conflict(conflict, writer)?;
        }

        if summary.dry_run && self.verbosity != Verbosity::Quiet {
            self.format_changes(summary, writer)?;
            if self.verbosity == Verbosity::Verbose {
                if let Some(preview) = &summary.preview {
                    writeln!(writer, "{}", summary.manifest.display())?;
                    write!(writer, "{}", preview)?;
                }
            }
        }

        if self.verbosity != Verbosity::Quiet {
            self.format_footer(summary, writer)?;
        }

        Ok(())
    }
}
