//! Locating package.json files inside the NuGet packages folder
//!
//! NuGet lays packages out as `<root>/<id>/<version>/` with both segments
//! lower-cased. A package can ship its package.json at the package root,
//! under `content/`, or under `contentFiles/any/any/`.

use crate::domain::PackageReference;
use std::path::{Path, PathBuf};

/// File name of an npm manifest
pub const NPM_MANIFEST: &str = "package.json";

/// Sub-directories searched, in order, below a package's version folder
const CANDIDATE_DIRS: &[&[&str]] = &[&[], &["content"], &["contentFiles", "any", "any"]];

/// Directory holding an installed package
pub fn package_dir(packages_root: &Path, reference: &PackageReference) -> PathBuf {
    packages_root
        .join(reference.name.to_lowercase())
        .join(reference.version.to_lowercase())
}

/// Candidate manifest paths for a package, in search order
pub fn candidate_paths(packages_root: &Path, reference: &PackageReference) -> Vec<PathBuf> {
    let base = package_dir(packages_root, reference);
    CANDIDATE_DIRS
        .iter()
        .map(|segments| {
            let mut path = base.clone();
            for segment in *segments {
                path.push(segment);
            }
            path.push(NPM_MANIFEST);
            path
        })
        .collect()
}

/// Find the package.json shipped by a package, if any
pub fn find_secondary_manifest(
    packages_root: &Path,
    reference: &PackageReference,
) -> Option<PathBuf> {
    candidate_paths(packages_root, reference)
        .into_iter()
        .find(|path| path.is_file())
}
