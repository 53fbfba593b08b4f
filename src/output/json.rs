//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of sync results
//! - Per-package contribution and skip information
//! - Version conflicts with every requesting package
//! - Changed entries, plus the would-be document in dry-run mode

use crate::domain::{ConflictWarning, DependencyKind, ManifestChange, SourceReport, SyncSummary};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Project file that was analysed
    project: String,
    /// Destination manifest
    manifest: String,
    /// Whether the manifest was written
    written: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-package results
    sources: Vec<JsonSource>,
    /// Version conflicts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conflicts: Vec<JsonConflict>,
    /// Entries added or rewritten
    #[serde(skip_serializing_if = "Vec::is_empty")]
    changes: Vec<JsonChange>,
    /// Document that would be written (dry-run only)
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<serde_json::Value>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Packages resolved for the project
    packages: usize,
    /// Packages that contributed at least one record
    contributing: usize,
    /// Records extracted
    records: usize,
    /// Entries written to the manifest
    merged: usize,
    /// Number of version conflicts
    conflicts: usize,
}

/// JSON representation of one scanned package
#[derive(Serialize)]
struct JsonSource {
    /// Package identifier
    name: String,
    /// Resolved version
    version: String,
    /// Location of its package.json
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// `dependencies` records
    dependencies: usize,
    /// `devDependencies` records
    dev_dependencies: usize,
    /// Why nothing was extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<String>,
}

/// JSON representation of a version conflict
#[derive(Serialize)]
struct JsonConflict {
    /// Dependency name
    name: String,
    /// Manifest section the conflict is in
    section: &'static str,
    /// Requests in first-seen order
    requested: Vec<JsonRequest>,
    /// Specifier that was written
    used: String,
}

/// JSON representation of a changed entry
#[derive(Serialize)]
struct JsonChange {
    name: String,
    section: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    to: String,
}

#[derive(Serialize)]
struct JsonRequest {
    source: String,
    version: String,
}

impl JsonFormatter {
    /// Whether a source belongs in the output at this verbosity
    fn include_source(&self, report: &SourceReport) -> bool {
        match self.verbosity {
            Verbosity::Verbose => true,
            Verbosity::Normal => {
                report.contributed() || report.skipped.as_ref().is_some_and(|r| r.is_warning())
            }
            Verbosity::Quiet => report.skipped.as_ref().is_some_and(|r| r.is_warning()),
        }
    }

    fn source_to_json(report: &SourceReport) -> JsonSource {
        JsonSource {
            name: report.reference.name.clone(),
            version: report.reference.version.clone(),
            path: report
                .manifest_path
                .as_ref()
                .map(|p| p.display().to_string()),
            dependencies: report.runtime_count,
            dev_dependencies: report.dev_count,
            skipped: report.skipped.as_ref().map(|r| r.to_string()),
        }
    }

    fn change_to_json(change: &ManifestChange) -> JsonChange {
        JsonChange {
            name: change.name.clone(),
            section: change.kind.section(),
            from: change.from.clone(),
            to: change.to.clone(),
        }
    }

    fn conflict_to_json(conflict: &ConflictWarning) -> JsonConflict {
        let kind = if conflict.is_dev {
            DependencyKind::Development
        } else {
            DependencyKind::Runtime
        };
        JsonConflict {
            name: conflict.package.clone(),
            section: kind.section(),
            requested: conflict
                .sources
                .iter()
                .map(|s| JsonRequest {
                    source: s.source.clone(),
                    version: s.version.clone(),
                })
                .collect(),
            used: conflict.used_version.clone(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &SyncSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: summary.dry_run,
            project: summary.descriptor.display().to_string(),
            manifest: summary.manifest.display().to_string(),
            written: summary.manifest_written,
            summary: JsonSummary {
                packages: summary.sources.len(),
                contributing: summary.contributing().count(),
                records: summary.total_records(),
                merged: summary.merged,
                conflicts: summary.conflicts.len(),
            },
            sources: summary
                .sources
                .iter()
                .filter(|s| self.include_source(s))
                .map(Self::source_to_json)
                .collect(),
            conflicts: summary
                .conflicts
                .iter()
                .map(Self::conflict_to_json)
                .collect(),
            changes: summary.changes.iter().map(Self::change_to_json).collect(),
            preview: summary
                .preview
                .as_deref()
                .and_then(|text| serde_json::from_str(text).ok()),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConflictSource, PackageReference, SkipReason};
    use serde_json::json;

    fn create_test_summary() -> SyncSummary {
        let mut summary = SyncSummary::new("App.csproj", "package.json", false);
        summary.add_source(SourceReport::extracted(
            PackageReference::new("Acme.Ui", "1.0.0"),
            "pkgs/acme.ui/1.0.0/package.json",
            2,
            0,
        ));
        summary.add_source(SourceReport::skipped(
            PackageReference::new("Acme.Core", "3.0.0"),
            None,
            SkipReason::NotFound,
        ));
        summary.add_source(SourceReport::skipped(
            PackageReference::new("Acme.Broken", "0.1.0"),
            Some("pkgs/acme.broken/0.1.0/package.json".into()),
            SkipReason::Empty,
        ));
        summary.conflicts.push(ConflictWarning {
            package: "typescript".to_string(),
            is_dev: true,
            sources: vec![
                ConflictSource::new("Acme.Ui 1.0.0", "^4.0.0"),
                ConflictSource::new("Acme.Charts 2.0.0", "^5.0.0"),
            ],
            used_version: "^5.0.0".to_string(),
        });
        summary.merged = 2;
        summary.manifest_written = true;
        summary
    }

    fn render(verbosity: Verbosity) -> serde_json::Value {
        let formatter = JsonFormatter::new(verbosity);
        let mut output = Vec::new();
        formatter.format(&create_test_summary(), &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_format_json() {
        let parsed = render(Verbosity::Normal);

        assert_eq!(parsed["dry_run"], false);
        assert_eq!(parsed["written"], true);
        assert_eq!(parsed["project"], "App.csproj");
        assert_eq!(parsed["summary"]["packages"], 3);
        assert_eq!(parsed["summary"]["contributing"], 1);
        assert_eq!(parsed["summary"]["records"], 2);
        assert_eq!(parsed["summary"]["merged"], 2);

        let sources = parsed["sources"].as_array().unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0]["name"], "Acme.Ui");
        assert_eq!(sources[0]["dependencies"], 2);
        assert!(sources[0].get("skipped").is_none());
        assert_eq!(sources[1]["skipped"], "empty package.json");

        let conflict = &parsed["conflicts"][0];
        assert_eq!(conflict["name"], "typescript");
        assert_eq!(conflict["section"], "devDependencies");
        assert_eq!(conflict["requested"][1]["source"], "Acme.Charts 2.0.0");
        assert_eq!(conflict["used"], "^5.0.0");
    }

    #[test]
    fn test_format_json_verbose_includes_all_sources() {
        let parsed = render(Verbosity::Verbose);
        let sources = parsed["sources"].as_array().unwrap();
        assert_eq!(sources.len(), 3);
        assert_eq!(sources[1]["skipped"], "no package.json");
    }

    #[test]
    fn test_format_json_quiet_keeps_warnings_only() {
        let parsed = render(Verbosity::Quiet);
        let sources = parsed["sources"].as_array().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0]["name"], "Acme.Broken");
        assert!(!parsed["conflicts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_dry_run_includes_changes_and_preview() {
        let mut summary = SyncSummary::new("App.csproj", "package.json", true);
        summary.changes = vec![
            ManifestChange::new("react", DependencyKind::Runtime, None, "^18.0.0"),
            ManifestChange::new(
                "vitest",
                DependencyKind::Development,
                Some("^0.34.0".to_string()),
                "^1.0.0",
            ),
        ];
        summary.preview = Some(
            "{\n  \"name\": \"web\",\n  \"dependencies\": {\n    \"react\": \"^18.0.0\"\n  }\n}\n"
                .to_string(),
        );

        let mut output = Vec::new();
        JsonFormatter::new(Verbosity::Normal)
            .format(&summary, &mut output)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(
            parsed["changes"],
            json!([
                {"name": "react", "section": "dependencies", "to": "^18.0.0"},
                {"name": "vitest", "section": "devDependencies", "from": "^0.34.0", "to": "^1.0.0"}
            ])
        );
        assert_eq!(
            parsed["preview"],
            json!({"name": "web", "dependencies": {"react": "^18.0.0"}})
        );
    }

    #[test]
    fn test_conflicts_omitted_when_none() {
        let summary = SyncSummary::new("App.csproj", "package.json", true);
        let mut output = Vec::new();
        JsonFormatter::new(Verbosity::Normal)
            .format(&summary, &mut output)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(parsed.get("conflicts").is_none());
        assert!(parsed.get("changes").is_none());
        assert!(parsed.get("preview").is_none());
        assert_eq!(parsed["dry_run"], true);
    }
}
