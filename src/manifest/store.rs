//! Destination package.json loading and saving
//!
//! This module provides:
//! - ManifestDocument, an insertion-ordered JSON object
//! - Tolerant loading (missing or broken files become an empty document)
//! - Section lookup-or-create that never reorders other keys
//! - Stable pretty-printed output with a trailing newline

use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Full content of a package.json, keys kept in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestDocument {
    root: Map<String, Value>,
}

impl ManifestDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from text
    ///
    /// A leading byte order mark is ignored. Returns `None` if the text is
    /// not JSON or its root is not an object.
    pub fn parse(content: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(strip_bom(content)) {
            Ok(Value::Object(root)) => Some(Self { root }),
            _ => None,
        }
    }

    /// Returns true if the document has no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up a top-level value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Look up an object-valued top-level section
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Return the object at `name`, creating it if needed
    ///
    /// A new key is appended after the existing ones. A key holding a
    /// non-object value is replaced in place.
    pub fn get_or_create_section(&mut self, name: &str) -> &mut Map<String, Value> {
        let slot = self
            .root
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => map,
            _ => unreachable!("section was just made an object"),
        }
    }

    /// Render the document exactly as `save` writes it
    pub fn render(&self) -> String {
        let mut text = serde_json::to_string_pretty(&self.root)
            .unwrap_or_else(|_| String::from("{}"));
        text.push('\n');
        text
    }
}

impl From<Map<String, Value>> for ManifestDocument {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

/// Drop a UTF-8 byte order mark, as written by Visual Studio
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Load a document from disk, falling back to an empty one
///
/// Never fails: a missing, unreadable or unparsable file yields an empty
/// document so a project without a package.json can be bootstrapped.
pub fn load(path: &Path) -> ManifestDocument {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| ManifestDocument::parse(&content))
        .unwrap_or_default()
}

/// Write a document to disk, overwriting any existing file
pub fn save(path: &Path, doc: &ManifestDocument) -> Result<(), ManifestError> {
    fs::write(path, doc.render()).map_err(|e| ManifestError::write_error(path, e))
}
