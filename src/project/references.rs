//! Resolved package listing through `dotnet list package`
//!
//! The build tool prints one table per target framework:
//!
//! ```text
//! Project 'App' has the following package references
//!    [net8.0]:
//!    Top-level Package              Requested   Resolved
//!    > Newtonsoft.Json              13.0.3      13.0.3
//!    > Microsoft.NET.ILLink.Tasks   (A)   [8.0.0, )   8.0.0
//!
//!    Transitive Package             Resolved
//!    > System.Text.Json             8.0.0
//! ```
//!
//! Only the package id and the resolved (last) column are used.

use crate::domain::PackageReference;
use crate::error::ToolError;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

/// Runs the external build tool
pub trait BuildTool {
    /// Return the raw package listing for a project
    fn list_packages(&self, descriptor: &Path) -> Result<String, ToolError>;
}

/// Build tool backed by the `dotnet` CLI
#[derive(Debug, Clone)]
pub struct DotnetCli {
    program: String,
}

impl DotnetCli {
    /// Create a runner for the `dotnet` on PATH
    pub fn new() -> Self {
        Self::with_program("dotnet")
    }

    /// Create a runner for a specific executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, descriptor: &Path) -> String {
        format!(
            "{} list {} package --include-transitive",
            self.program,
            descriptor.display()
        )
    }
}

impl Default for DotnetCli {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTool for DotnetCli {
    fn list_packages(&self, descriptor: &Path) -> Result<String, ToolError> {
        let output = Command::new(&self.program)
            .arg("list")
            .arg(descriptor)
            .arg("package")
            .arg("--include-transitive")
            .output()
            .map_err(|e| ToolError::build_tool_failed(self.command_line(descriptor), e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // dotnet reports most failures on stdout
            let message = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(ToolError::build_tool_failed(
                self.command_line(descriptor),
                message,
            ));
        }

        Ok(stdout)
    }
}

/// `> <id> [marker] [requested] <resolved>`
static PACKAGE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*(?P<name>\S+)\s+(?:.*\s)?(?P<version>\S+)$").unwrap());

/// Parse the tabular output of `dotnet list package`
///
/// Rows repeated across target frameworks are reported once, in the order
/// they first appear.
pub fn parse_package_list(output: &str) -> Vec<PackageReference> {
    let mut seen: HashSet<PackageReference> = HashSet::new();
    let mut references = Vec::new();

    for line in output.lines() {
        let Some(caps) = PACKAGE_ROW.captures(line.trim()) else {
            continue;
        };
        let reference = PackageReference::new(&caps["name"], &caps["version"]);
        if seen.insert(reference.clone()) {
            references.push(reference);
        }
    }

    references
}

/// List the resolved packages of a project
pub fn list_resolved_references(
    tool: &dyn BuildTool,
    descriptor: &Path,
) -> Result<Vec<PackageReference>, ToolError> {
    let output = tool.list_packages(descriptor)?;
    Ok(parse_package_list(&output))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
Project 'App' has the following package references
   [net8.0]:
   Top-level Package              Requested   Resolved
   > Acme.Ui                      1.2.0       1.2.0
   > Microsoft.NET.ILLink.Tasks   (A)   [8.0.0, )   8.0.0

   Transitive Package             Resolved
   > Acme.Core                    3.0.1

   [net6.0]:
   Top-level Package              Requested   Resolved
   > Acme.Ui                      1.2.0       1.2.0
";

    struct FakeTool {
        result: Result<String, String>,
    }

    impl BuildTool for FakeTool {
        fn list_packages(&self, _descriptor: &Path) -> Result<String, ToolError> {
            self.result
                .clone()
                .map_err(|m| ToolError::build_tool_failed("fake list", m))
        }
    }

    #[test]
    fn test_parse_sample() {
        let refs = parse_package_list(SAMPLE);
        assert_eq!(
            refs,
            vec![
                PackageReference::new("Acme.Ui", "1.2.0"),
                PackageReference::new("Microsoft.NET.ILLink.Tasks", "8.0.0"),
                PackageReference::new("Acme.Core", "3.0.1"),
            ]
        );
    }

    #[test]
    fn test_parse_auto_reference_marker() {
        let refs = parse_package_list("> Some.Pkg (A) 2.0.0 2.0.1");
        assert_eq!(refs, vec![PackageReference::new("Some.Pkg", "2.0.1")]);
    }

    #[test]
    fn test_parse_transitive_row() {
        let refs = parse_package_list("      > Transitive.Only      4.5.6   ");
        assert_eq!(refs, vec![PackageReference::new("Transitive.Only", "4.5.6")]);
    }

    #[test]
    fn test_parse_ignores_headers_and_short_rows() {
        let refs = parse_package_list("Top-level Package  Requested  Resolved\n> Lonely\n>\n");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_parse_same_package_different_versions() {
        let refs = parse_package_list("> A 1.0.0 1.0.0\n> A 2.0.0 2.0.0\n");
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_package_list("").is_empty());
        assert!(parse_package_list("The project has no package references.").is_empty());
    }

    #[test]
    fn test_list_resolved_references_ok() {
        let tool = FakeTool {
            result: Ok("> A 1.0.0 1.0.0".to_string()),
        };
        let refs = list_resolved_references(&tool, Path::new("App.csproj")).unwrap();
        assert_eq!(refs, vec![PackageReference::new("A", "1.0.0")]);
    }

    #[test]
    fn test_list_resolved_references_failure() {
        let tool = FakeTool {
            result: Err("assets file not found".to_string()),
        };
        let err = list_resolved_references(&tool, Path::new("App.csproj")).unwrap_err();
        assert!(err.to_string().contains("assets file not found"));
    }

    #[test]
    fn test_dotnet_missing_program() {
        let tool = DotnetCli::with_program("definitely-not-a-real-dotnet-binary");
        let err = tool.list_packages(Path::new("App.csproj")).unwrap_err();
        assert!(matches!(err, ToolError::BuildToolFailed { .. }));
    }

    #[test]
    fn test_command_line() {
        let tool = DotnetCli::new();
        assert_eq!(
            tool.command_line(Path::new("App.csproj")),
            "dotnet list App.csproj package --include-transitive"
        );
    }
}
