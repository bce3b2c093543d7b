//! Per-check console reporting
//!
//! One line is printed for every completed single-version check. Failure
//! details go to stderr so the stdout listing stays readable.

use crate::domain::CandidateSet;
use colored::Colorize;
use std::io::{self, Write};

/// Sink for check outcomes
pub trait Reporter {
    /// `name@version` passed its tests
    fn success(&self, name_version: &str);

    /// `name@version` failed; `detail` is the underlying error
    fn failure(&self, name_version: &str, detail: &str);
}

/// Reporter printing to the terminal
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
    /// Send result lines to stderr too (stdout is reserved for JSON)
    stderr_only: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            stderr_only: false,
        }
    }

    /// Reporter that leaves stdout untouched
    pub fn stderr_only(color: bool) -> Self {
        Self {
            color,
            stderr_only: true,
        }
    }

    fn line(&self, line: String) {
        if self.stderr_only {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn success(&self, name_version: &str) {
        self.line(success_line(name_version, self.color));
    }

    fn failure(&self, name_version: &str, detail: &str) {
        self.line(failure_line(name_version, self.color));
        eprintln!("{}", detail);
    }
}

/// `name@version works`
pub fn success_line(name_version: &str, color: bool) -> String {
    let line = format!("{} works", name_version);
    if color {
        line.green().to_string()
    } else {
        line
    }
}

/// `name@version tests failed :(`
pub fn failure_line(name_version: &str, color: bool) -> String {
    let line = format!("{} tests failed :(", name_version);
    if color {
        line.red().to_string()
    } else {
        line
    }
}

/// Print the versions that are about to be tested
pub fn report_available(
    available: &[CandidateSet],
    color: bool,
    writer: &mut dyn Write,
) -> io::Result<()> {
    if available.is_empty() {
        writeln!(writer, "no new versions available")?;
        return Ok(());
    }

    let width = available.iter().map(|set| set.name.len()).max().unwrap_or(0);
    writeln!(writer, "available updates:")?;
    for set in available {
        let name = format!("{:<width$}", set.name, width = width);
        let name = if color {
            name.bold().to_string()
        } else {
            name
        };
        writeln!(writer, "  {}  {}", name, set.versions.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_line_plain() {
        assert_eq!(success_line("lodash@3.0.0", false), "lodash@3.0.0 works");
    }

    #[test]
    fn test_failure_line_plain() {
        assert_eq!(
            failure_line("lodash@3.0.0", false),
            "lodash@3.0.0 tests failed :("
        );
    }

    #[test]
    fn test_colored_lines_keep_text() {
        assert!(success_line("q@1.0.1", true).contains("q@1.0.1 works"));
        assert!(failure_line("q@1.0.1", true).contains("q@1.0.1 tests failed"));
    }

    #[test]
    fn test_report_available() {
        let available = vec![
            CandidateSet::new("lodash", vec!["3.0.0".to_string(), "3.10.1".to_string()]),
            CandidateSet::new("q", vec!["1.0.1".to_string()]),
        ];
        let mut out = Vec::new();
        report_available(&available, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "available updates:\n  lodash  3.0.0, 3.10.1\n  q       1.0.1\n"
        );
    }

    #[test]
    fn test_report_available_empty() {
        let mut out = Vec::new();
        report_available(&[], false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "no new versions available\n");
    }
}
