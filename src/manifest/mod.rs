//! package.json reading, extraction and writing
//!
//! This module provides functionality to:
//! - Load and save the destination package.json without disturbing
//!   fields this tool does not manage
//! - Extract dependency records from package.json files shipped in packages
//! - Locate those files inside the NuGet packages folder

pub mod extractor;
pub mod locator;
pub mod store;

pub use extractor::extract;
pub use locator::{find_secondary_manifest, NPM_MANIFEST};
pub use store::{load, save, strip_bom, ManifestDocument};
