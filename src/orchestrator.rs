//! Install → test → revert workflow
//!
//! This module provides:
//! - Per-version mode: every candidate of every dependency is installed and
//!   tested on its own, then the declared version is restored
//! - All-at-once mode: the first candidate of every dependency is installed,
//!   the tests run once, then everything is restored
//!
//! Every step runs only after the previous one has finished. Installs mutate
//! the shared `node_modules` tree, so nothing here may run concurrently.

use crate::domain::{CandidateSet, DependencySpec, RunOptions, TestResult};
use crate::error::{AppError, ConfigError, InstallError};
use crate::installer::{revert_modules, Installer};
use crate::report::Reporter;
use crate::test_runner::TestRunner;
use tracing::{error, info};

/// Sequences installs, test runs and reverts
pub struct Orchestrator<'a> {
    installer: &'a dyn Installer,
    runner: &'a dyn TestRunner,
    reporter: &'a dyn Reporter,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        installer: &'a dyn Installer,
        runner: &'a dyn TestRunner,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            installer,
            runner,
            reporter,
        }
    }

    /// Test the `available` candidates against the module's tests.
    ///
    /// `declared` supplies the version each dependency is restored to.
    /// Test failures are recorded as `works: false`; revert failures, and
    /// install failures in all-at-once mode, abort the run.
    pub fn test_modules_versions(
        &self,
        options: &RunOptions,
        declared: &[DependencySpec],
        available: &[CandidateSet],
    ) -> Result<Vec<TestResult>, AppError> {
        if available.is_empty() {
            return Ok(Vec::new());
        }

        let listed = declared_for(declared, available)?;

        if options.all {
            return self.install_all_test_revert(&listed, available);
        }
        self.install_each_test_revert(&listed, available)
    }

    /// Per-version mode over all dependencies
    fn install_each_test_revert(
        &self,
        listed: &[&DependencySpec],
        available: &[CandidateSet],
    ) -> Result<Vec<TestResult>, AppError> {
        let mut results = Vec::new();
        for (set, current) in available.iter().zip(listed) {
            self.test_module_versions(set, current, &mut results)?;
        }
        Ok(results)
    }

    /// Try every candidate of one dependency, then restore its declared version
    pub fn test_module_versions(
        &self,
        set: &CandidateSet,
        current: &DependencySpec,
        results: &mut Vec<TestResult>,
    ) -> Result<(), InstallError> {
        info!(name = %set.name, versions = set.versions.len(), "checking");
        for version in &set.versions {
            self.test_module_version(&set.name, version, results);
        }

        revert_modules(self.installer, &[current]).inspect_err(|e| {
            error!(name = %set.name, "could not restore declared version: {}", e);
        })
    }

    /// Install one exact version, run the tests and record the outcome.
    ///
    /// Always pushes exactly one result. An install failure counts as a
    /// failed check, since the module cannot work with a version that does
    /// not install.
    pub fn test_module_version(&self, name: &str, version: &str, results: &mut Vec<TestResult>) {
        let name_version = format!("{}@{}", name, version);
        info!("testing {}", name_version);

        let outcome = self
            .installer
            .install(name, version)
            .map_err(|e| e.to_string())
            .and_then(|()| self.runner.run().map_err(|e| e.to_string()));

        match outcome {
            Ok(()) => {
                self.reporter.success(&name_version);
                results.push(TestResult::working(name, version));
            }
            Err(detail) => {
                self.reporter.failure(&name_version, &detail);
                results.push(TestResult::failing(name, version));
            }
        }
    }

    /// All-at-once mode: first candidate of each dependency, one test run.
    ///
    /// Whatever was attempted is restored even when an install fails partway;
    /// the install error is returned after the revert.
    fn install_all_test_revert(
        &self,
        listed: &[&DependencySpec],
        available: &[CandidateSet],
    ) -> Result<Vec<TestResult>, AppError> {
        let mut installed = Vec::new();
        let mut attempted: Vec<&DependencySpec> = Vec::new();

        for (set, current) in available.iter().zip(listed) {
            let Some(version) = set.first() else {
                continue;
            };
            attempted.push(*current);
            if let Err(e) = self.installer.install(&set.name, version) {
                error!("{}", e);
                if let Err(revert) = revert_modules(self.installer, &attempted) {
                    error!("could not restore declared versions: {}", revert);
                }
                return Err(e.into());
            }
            installed.push((set.name.as_str(), version));
        }

        let label = installed
            .iter()
            .map(|(name, version)| format!("{}@{}", name, version))
            .collect::<Vec<_>>()
            .join(", ");

        let works = match self.runner.run() {
            Ok(()) => {
                self.reporter.success(&label);
                true
            }
            Err(e) => {
                self.reporter.failure(&label, &e.to_string());
                false
            }
        };

        revert_modules(self.installer, &attempted)?;

        Ok(installed
            .into_iter()
            .map(|(name, version)| TestResult::new(name, version, works))
            .collect())
    }
}

/// Declared spec for every candidate set, in the same order
fn declared_for<'d>(
    declared: &'d [DependencySpec],
    available: &[CandidateSet],
) -> Result<Vec<&'d DependencySpec>, ConfigError> {
    available
        .iter()
        .map(|set| {
            declared
                .iter()
                .find(|dep| dep.name == set.name)
                .ok_or_else(|| {
                    ConfigError::invalid_input(format!(
                        "cannot find current version for {} among current dependencies",
                        set.name
                    ))
                })
        })
        .collect()
}
