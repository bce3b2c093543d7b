//! Candidate versions to try for one dependency

/// Versions of one dependency that will be trial-installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    /// Package name
    pub name: String,
    /// Versions to test, in the order they will be installed
    pub versions: Vec<String>,
}

impl CandidateSet {
    pub fn new(name: impl Into<String>, versions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            versions,
        }
    }

    /// First version to try (used by all-at-once mode)
    pub fn first(&self) -> Option<&str> {
        self.versions.first().map(String::as_str)
    }

    /// Keeps only the newest candidate
    pub fn latest_only(mut self) -> Self {
        if let Some(last) = self.versions.pop() {
            self.versions = vec![last];
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
