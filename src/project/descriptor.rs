//! .NET project file discovery

use crate::error::ProjectError;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognised as project descriptors
const PROJECT_EXTENSIONS: &[&str] = &["csproj", "fsproj", "vbproj"];

fn is_project_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| PROJECT_EXTENSIONS.iter().any(|p| e.eq_ignore_ascii_case(p)))
            .unwrap_or(false)
}

/// Find the single project file directly inside `dir`
pub fn locate_primary_descriptor(dir: &Path) -> Result<PathBuf, ProjectError> {
    let entries = fs::read_dir(dir).map_err(|e| ProjectError::ReadDir {
        dir: dir.to_path_buf(),
        source: e,
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_project_file(path))
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Err(ProjectError::not_found(dir)),
        1 => Ok(candidates.remove(0)),
        _ => Err(ProjectError::ambiguous(
            dir,
            candidates
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        )),
    }
}

/// Resolve the project descriptor from an explicit path or by discovery
pub fn resolve_descriptor(explicit: Option<&Path>, dir: &Path) -> Result<PathBuf, ProjectError> {
    match explicit {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => Err(ProjectError::MissingFile {
            path: path.to_path_buf(),
        }),
        None => locate_primary_descriptor(dir),
    }
}
