//! Core domain models for next-update
//!
//! This module contains the fundamental types used throughout the application:
//! - Declared dependencies and their version ranges
//! - Candidate versions fetched from the registry
//! - Per-version test results
//! - Run options

mod candidate;
mod dependency;
mod options;
mod test_result;
mod version_spec;

pub use candidate::CandidateSet;
pub use dependency::{parse_name_version, DependencySpec};
pub use options::{ModuleFilter, RunOptions};
pub use test_result::TestResult;
pub use version_spec::{VersionSpec, VersionSpecKind};
