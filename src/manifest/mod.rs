//! Dependency selection from package.json
//!
//! This module provides functionality to:
//! - Read and merge the manifest's dependency maps
//! - Restrict the result to the modules the user asked for

mod package_json;

pub use package_json::parse_package_json;

use crate::domain::{DependencySpec, ModuleFilter};
use crate::error::ManifestError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Manifest file name looked up in the project directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Path of the manifest inside a project directory
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILENAME)
}

/// Read all declared dependencies from a manifest file
pub fn read_dependencies(path: &Path) -> Result<Vec<DependencySpec>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse_package_json(&content, path)
}

/// Read the manifest and keep only the dependencies named by `filter`
pub fn select_dependencies(
    path: &Path,
    filter: Option<&ModuleFilter>,
) -> Result<Vec<DependencySpec>, ManifestError> {
    let dependencies = read_dependencies(path)?;
    let Some(filter) = filter else {
        return Ok(dependencies);
    };

    let selected: Vec<DependencySpec> = dependencies
        .into_iter()
        .filter(|dep| filter.matches(&dep.name))
        .collect();
    info!(
        only = ?selected.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
        "only checking"
    );
    Ok(selected)
}
