//! package.json dependency extraction for packages shipped in NuGet
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Everything else in the file is ignored.

use crate::domain::{DependencyKind, DependencyRecord};
use super::store::strip_bom;
use crate::error::ManifestError;
use serde_json::{Map, Value};

/// Extract dependency records from the text of a package.json
///
/// `label` identifies the package the file came from and is copied into
/// every record. Runtime records come first, each bucket in file order.
/// Entries whose value is not a string are skipped. A leading byte order
/// mark is ignored.
pub fn extract(label: &str, content: &str) -> Result<Vec<DependencyRecord>, ManifestError> {
    let json: Value = serde_json::from_str(strip_bom(content))
        .map_err(|e| ManifestError::secondary_parse_error(label, e.to_string()))?;

    let Value::Object(root) = json else {
        return Err(ManifestError::secondary_parse_error(
            label,
            "top-level value is not an object",
        ));
    };

    let mut records = Vec::new();
    for kind in DependencyKind::all() {
        if let Some(deps) = root.get(kind.section()).and_then(Value::as_object) {
            parse_dependency_object(deps, label, kind.is_dev(), &mut records);
        }
    }

    Ok(records)
}

fn parse_dependency_object(
    deps: &Map<String, Value>,
    label: &str,
    is_dev: bool,
    output: &mut Vec<DependencyRecord>,
) {
    for (name, version_value) in deps {
        if let Some(version) = version_value.as_str() {
            output.push(DependencyRecord::new(name.clone(), version, label, is_dev));
        }
    }
}
