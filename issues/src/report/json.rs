//! JSON renderer for structured output

use super::ReportRenderer;
use crate::tally::{CategoryCount, IssueTally, OtherValue};
use crate::types::SkippedRecord;
use serde::Serialize;

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total_inspections: u64,
    decode_failures: u64,
    no_identified_issues: u64,
    with_identified_issues: u64,
    fixed: u64,
    unfixed: u64,
    other: u64,
    other_values: Vec<&'a OtherValue>,
    unfixed_categories: Vec<&'a CategoryCount>,
    skipped_records: &'a [SkippedRecord],
}

impl<'a> From<&'a IssueTally> for JsonReport<'a> {
    fn from(tally: &'a IssueTally) -> Self {
        Self {
            total_inspections: tally.total_inspections,
            decode_failures: tally.decode_failures,
            no_identified_issues: tally.no_identified_issues,
            with_identified_issues: tally.with_identified_issues(),
            fixed: tally.fixed,
            unfixed: tally.unfixed,
            other: tally.other,
            other_values: tally.other_values(),
            unfixed_categories: tally.unfixed_categories(),
            skipped_records: tally.skipped_records(),
        }
    }
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, tally: &IssueTally) -> String {
        let report = JsonReport::from(tally);
        if self.pretty {
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&report).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
