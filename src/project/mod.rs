//! Primary .NET project analysis
//!
//! This module provides:
//! - Discovery of the project file (.csproj, .fsproj, .vbproj)
//! - Listing of resolved NuGet packages through the dotnet CLI

mod descriptor;
mod references;

pub use descriptor::{locate_primary_descriptor, resolve_descriptor};
pub use references::{list_resolved_references, parse_package_list, BuildTool, DotnetCli};
