//! next-update - check which newer dependency versions keep your tests green
//!
//! For every dependency declared in `package.json` this library:
//! - queries the npm registry for versions newer than the declared one
//! - installs each candidate, runs the test command and records the outcome
//! - reinstalls the declared version afterwards

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
pub mod report;
pub mod test_runner;
