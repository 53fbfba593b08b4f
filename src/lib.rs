//! nugetnpm - sync npm dependencies shipped inside NuGet packages
//!
//! This library provides the pieces of the sync workflow:
//! - Locating the .NET project and listing its resolved packages
//! - Finding package.json files inside the NuGet global packages folder
//! - Merging their dependencies into the project's package.json
//! - Running the npm installer afterwards

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod project;
