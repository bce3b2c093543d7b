//! Text output formatter for human-readable display
//!
//! Prints one row per tested version followed by a count line. In quiet mode
//! only the count line is printed.

use crate::domain::TestResult;
use crate::output::{OutputFormatter, ResultSummary, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn status(&self, works: bool) -> String {
        match (works, self.color) {
            (true, true) => "works".green().to_string(),
            (false, true) => "fails".red().bold().to_string(),
            (true, false) => "works".to_string(),
            (false, false) => "fails".to_string(),
        }
    }

    fn summary_line(&self, summary: &ResultSummary) -> String {
        if summary.total == 0 {
            return "nothing was tested".to_string();
        }
        let working = format!("{} working", summary.working);
        let failing = format!("{} failing", summary.failing);
        if self.color {
            format!("{}, {}", working.green(), failing.red())
        } else {
            format!("{}, {}", working, failing)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[TestResult], writer: &mut dyn Write) -> std::io::Result<()> {
        let summary = ResultSummary::from_results(results);

        if self.verbosity != Verbosity::Quiet && !results.is_empty() {
            let labels: Vec<String> = results.iter().map(TestResult::name_version).collect();
            let width = labels.iter().map(String::len).max().unwrap_or(0);

            writeln!(writer)?;
            writeln!(writer, "test results:")?;
            for (label, result) in labels.iter().zip(results) {
                writeln!(
                    writer,
                    "  {:<width$}  {}",
                    label,
                    self.status(result.works),
                    width = width
                )?;
            }
        }

        writeln!(writer, "{}", self.summary_line(&summary))
    }
}
