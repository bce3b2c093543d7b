//! Outcome of testing one dependency version

use serde::Serialize;

/// Whether the module's tests passed with `name@version` installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    /// Package name
    pub name: String,
    /// Version that was installed for the test run
    pub version: String,
    /// True if the test command succeeded
    pub works: bool,
}

impl TestResult {
    pub fn new(name: impl Into<String>, version: impl Into<String>, works: bool) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            works,
        }
    }

    /// A passing result
    pub fn working(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, true)
    }

    /// A failing result
    pub fn failing(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, false)
    }

    /// `name@version`
    pub fn name_version(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
