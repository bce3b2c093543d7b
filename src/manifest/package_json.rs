//! package.json reader
//!
//! Merges `dependencies` and `devDependencies` into one ordered list.
//! A dev entry replaces the version of a same-named regular entry but keeps
//! its position; new dev entries are appended in file order.

use crate::domain::DependencySpec;
use crate::error::ManifestError;
use crate::parser::clean_version;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// The parts of package.json this tool reads
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: IndexMap<String, Value>,
    #[serde(default)]
    dev_dependencies: IndexMap<String, Value>,
}

/// Parses package.json content into normalized dependency specs
pub fn parse_package_json(content: &str, path: &Path) -> Result<Vec<DependencySpec>, ManifestError> {
    let manifest: PackageJson = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let mut merged = manifest.dependencies;
    for (name, version) in manifest.dev_dependencies {
        merged.insert(name, version);
    }

    let mut dependencies = Vec::with_capacity(merged.len());
    for (name, value) in merged {
        let Some(declared) = value.as_str() else {
            warn!(%name, "skipping dependency with non-string version {}", value);
            continue;
        };

        match clean_version(declared) {
            Some(version) => dependencies.push(DependencySpec::new(name, declared, version)),
            None => {
                warn!(
                    %name,
                    declared,
                    "could not determine a concrete version, list a specific version number to check it"
                );
            }
        }
    }

    debug!(count = dependencies.len(), path = %path.display(), "read dependencies");
    Ok(dependencies)
}
