//! JSON output formatter for machine processing

use crate::domain::TestResult;
use crate::output::{OutputFormatter, ResultSummary};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    results: &'a [TestResult],
    summary: ResultSummary,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[TestResult], writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            results,
            summary: ResultSummary::from_results(results),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render(results: &[TestResult]) -> Value {
        let mut out = Vec::new();
        JsonFormatter::new().format(results, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_json_schema() {
        let json = render(&[
            TestResult::working("lodash", "3.0.0"),
            TestResult::failing("lodash", "4.0.0"),
        ]);

        assert_eq!(json["results"][0]["name"], "lodash");
        assert_eq!(json["results"][0]["version"], "3.0.0");
        assert_eq!(json["results"][0]["works"], true);
        assert_eq!(json["results"][1]["works"], false);
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["working"], 1);
        assert_eq!(json["summary"]["failing"], 1);
    }

    #[test]
    fn test_json_empty() {
        let json = render(&[]);
        assert_eq!(json["results"], Value::Array(vec![]));
        assert_eq!(json["summary"]["total"], 0);
    }
}
