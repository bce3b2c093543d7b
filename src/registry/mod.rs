//! Registry lookups that produce the candidate versions to test
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - npm Registry version source
//! - Sequential candidate collection for the selected dependencies

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::{newer_versions, NpmRegistry, NPM_REGISTRY_URL};

use crate::domain::{CandidateSet, DependencySpec};
use crate::error::RegistryError;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Source of candidate versions for a package
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Versions newer than `current`, in the order they should be tried
    async fn next_versions(&self, name: &str, current: &str) -> Result<Vec<String>, RegistryError>;
}

/// Look up candidates for each dependency, one at a time.
///
/// Dependencies whose lookup fails are logged and left out; dependencies with
/// nothing newer are dropped. `on_progress` is called after each lookup.
pub async fn collect_candidates(
    source: &dyn VersionSource,
    dependencies: &[DependencySpec],
    latest_only: bool,
    mut on_progress: impl FnMut(&DependencySpec),
) -> Vec<CandidateSet> {
    let mut available = Vec::new();

    for dep in dependencies {
        let result = source.next_versions(&dep.name, &dep.version).await;
        on_progress(dep);

        let versions = match result {
            Ok(versions) => versions,
            Err(e) => {
                warn!(name = %dep.name, "skipping, could not fetch versions: {}", e);
                continue;
            }
        };

        let set = CandidateSet::new(dep.name.clone(), versions);
        let set = if latest_only { set.latest_only() } else { set };
        if set.is_empty() {
            debug!(name = %dep.name, version = %dep.version, "no newer versions");
            continue;
        }
        available.push(set);
    }

    available
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticSource {
        versions: HashMap<&'static str, Vec<&'static str>>,
    }

    #[async_trait]
    impl VersionSource for StaticSource {
        fn registry_name(&self) -> &'static str {
            "static"
        }

        async fn next_versions(
            &self,
            name: &str,
            current: &str,
        ) -> Result<Vec<String>, RegistryError> {
            match self.versions.get(name) {
                Some(published) => Ok(newer_versions(published.iter(), current)),
                None => Err(RegistryError::package_not_found(name, "static")),
            }
        }
    }

    fn source() -> StaticSource {
        let mut versions = HashMap::new();
        versions.insert("lodash", vec!["3.0.0", "3.5.0", "3.10.1"]);
        versions.insert("q", vec!["1.0.1"]);
        StaticSource { versions }
    }

    #[tokio::test]
    async fn test_collect_candidates() {
        let deps = vec![
            DependencySpec::new("lodash", "^2.4.1", "2.4.1"),
            DependencySpec::new("q", "~1.0.1", "1.0.1"),
            DependencySpec::new("missing", "1.0.0", "1.0.0"),
        ];

        let mut seen = Vec::new();
        let available = collect_candidates(&source(), &deps, false, |d| seen.push(d.name.clone())).await;

        assert_eq!(
            available,
            vec![CandidateSet::new(
                "lodash",
                vec!["3.0.0".to_string(), "3.5.0".to_string(), "3.10.1".to_string()]
            )]
        );
        assert_eq!(seen, vec!["lodash", "q", "missing"]);
    }

    #[tokio::test]
    async fn test_collect_candidates_latest_only() {
        let deps = vec![DependencySpec::new("lodash", "^2.4.1", "2.4.1")];
        let available = collect_candidates(&source(), &deps, true, |_| {}).await;
        assert_eq!(available[0].versions, vec!["3.10.1"]);
    }

    #[tokio::test]
    async fn test_collect_candidates_empty() {
        let available = collect_candidates(&source(), &[], false, |_| {}).await;
        assert!(available.is_empty());
    }
}
