//! Output formatting for test results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::TestResult;
use serde::Serialize;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// How much of the result table to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Count line only
    Quiet,
    /// Full table
    #[default]
    Normal,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, quiet: bool, color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color,
        }
    }
}

/// Counts over a list of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResultSummary {
    pub total: usize,
    pub working: usize,
    pub failing: usize,
}

impl ResultSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let working = results.iter().filter(|r| r.works).count();
        Self {
            total: results.len(),
            working,
            failing: results.len() - working,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the final results of a run
    fn format(&self, results: &[TestResult], writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert!(config.color);
    }

    #[test]
    fn test_output_config_from_cli_json() {
        let config = OutputConfig::from_cli(true, false, true);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_output_config_from_cli_quiet() {
        let config = OutputConfig::from_cli(false, true, false);
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert!(!config.color);
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            TestResult::working("lodash", "3.0.0"),
            TestResult::failing("lodash", "4.0.0"),
            TestResult::working("q", "1.0.1"),
        ];
        assert_eq!(
            ResultSummary::from_results(&results),
            ResultSummary {
                total: 3,
                working: 2,
                failing: 1
            }
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(ResultSummary::from_results(&[]), ResultSummary::default());
    }
}
