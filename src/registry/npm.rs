//! npm Registry version source
//!
//! Fetches package metadata from the npm registry and keeps the versions
//! newer than the one the project declares.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use semver::Version;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

const REGISTRY_NAME: &str = "npm";

/// npm package metadata response
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Available versions keyed by version string
    #[serde(default)]
    versions: HashMap<String, serde_json::Value>,
}

/// npm Registry version source
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

impl NpmRegistry {
    /// Create an npm registry source against `base_url`
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package (scoped names are encoded `@scope%2Fname`)
    fn build_url(&self, package: &str) -> String {
        let encoded = if package.starts_with('@') {
            package.replace('/', "%2F")
        } else {
            package.to_string()
        };
        format!("{}/{}", self.base_url, encoded)
    }
}

/// Versions strictly newer than `current`, sorted ascending.
///
/// Pre-releases are only kept when `current` is itself a pre-release.
/// Version strings that are not valid semver are ignored.
pub fn newer_versions<I, S>(published: I, current: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Ok(current) = Version::parse(current) else {
        warn!(current, "cannot compare against an invalid version");
        return Vec::new();
    };
    let allow_prerelease = !current.pre.is_empty();

    let mut newer: Vec<Version> = published
        .into_iter()
        .filter_map(|v| Version::parse(v.as_ref()).ok())
        .filter(|v| allow_prerelease || v.pre.is_empty())
        .filter(|v| *v > current)
        .collect();
    newer.sort();
    newer.dedup();
    newer.into_iter().map(|v| v.to_string()).collect()
}

#[async_trait]
impl VersionSource for NpmRegistry {
    fn registry_name(&self) -> &'static str {
        REGISTRY_NAME
    }

    async fn next_versions(&self, name: &str, current: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.build_url(name);
        debug!(%url, "fetching package metadata");
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, name, self.registry_name())
            .await?;

        Ok(newer_versions(response.versions.keys(), current))
    }
}
