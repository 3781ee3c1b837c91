//! Plain-text report, the default console output

use super::{ReportRenderer, ReportView, TableBuilder};
use crate::tally::IssueTally;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Human-readable multi-section report
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub view: ReportView,
    pub inspection_type: String,
}

impl TextRenderer {
    pub fn new(view: ReportView) -> Self {
        Self {
            view,
            inspection_type: "INSPECTION".to_string(),
        }
    }

    /// Label used for the record type in headings
    pub fn with_inspection_type<S: Into<String>>(mut self, inspection_type: S) -> Self {
        self.inspection_type = inspection_type.into();
        self
    }

    fn title(&self) -> &'static str {
        match self.view {
            ReportView::Full => "INSPECTION ISSUE ANALYSIS REPORT",
            ReportView::FixDescriptions => "FIXED ISSUES ANALYSIS - Activities with Identified Issues",
        }
    }

    fn write_header(&self, out: &mut String, tally: &IssueTally) {
        rule(out);
        let _ = writeln!(out, "{}", self.title());
        rule(out);
        let _ = writeln!(
            out,
            "\nTotal {} activities: {}",
            self.inspection_type, tally.total_inspections
        );
    }

    fn write_presence(&self, out: &mut String, tally: &IssueTally) {
        let _ = writeln!(out, "\nIssue presence:");
        let mut table = TableBuilder::new();
        table
            .headers(["Status", "Count"])
            .count_row("Identified issues recorded", tally.with_identified_issues())
            .count_row("No identified issues recorded", tally.no_identified_issues)
            .count_row("Unreadable data (skipped)", tally.decode_failures);
        let _ = writeln!(out, "{}", table.build());
    }

    fn write_fix_status(&self, out: &mut String, tally: &IssueTally) {
        let _ = writeln!(out, "\nActivities WITH identified issues:");
        let mut table = TableBuilder::new();
        table
            .headers(["Fix status", "Count"])
            .count_row("Fixed on spot (fixedIssues = true)", tally.fixed)
            .count_row("NOT fixed (fixedIssues = false)", tally.unfixed)
            .count_row("Other status (text, null, structured)", tally.other)
            .count_row("TOTAL", tally.with_identified_issues());
        let _ = writeln!(out, "{}", table.build());
    }

    fn write_other_values(&self, out: &mut String, tally: &IssueTally) {
        section(out, "BREAKDOWN OF OTHER fixedIssues VALUES");
        let values = tally.other_values();
        if values.is_empty() {
            let _ = writeln!(out, "\n(none)");
            return;
        }

        for entry in values {
            let _ = writeln!(out, "\nValue: {}", entry.value);
            let _ = writeln!(out, "Count: {}", entry.count);
            let _ = writeln!(out, "Examples:");
            for example in &entry.examples {
                let _ = writeln!(out, "  - Activity {}: {}", example.activity_id, example.value);
            }
        }
    }

    fn write_unfixed_categories(&self, out: &mut String, tally: &IssueTally) {
        section(out, "UNFIXED ISSUES BY INSPECTION CATEGORY");
        let categories = tally.unfixed_categories();
        if categories.is_empty() {
            let _ = writeln!(out, "\n(none)");
            return;
        }

        let mut table = TableBuilder::new();
        table.headers(["Category", "Count"]);
        for category in categories {
            table.count_row(category.category.as_str(), category.count);
        }
        let _ = writeln!(out, "\n{}", table.build());
    }

    fn write_skipped(&self, out: &mut String, tally: &IssueTally) {
        if tally.skipped_records().is_empty() {
            return;
        }

        section(out, "SKIPPED RECORDS (data could not be decoded)");
        let mut table = TableBuilder::new();
        table.headers(["Activity", "Reason"]);
        for skipped in tally.skipped_records() {
            table.row([skipped.activity_id.as_str(), skipped.reason.as_str()]);
        }
        let _ = writeln!(out, "\n{}", table.build());
    }

    fn write_summary(&self, out: &mut String, tally: &IssueTally) {
        let _ = writeln!(out);
        rule(out);
        let _ = writeln!(out, "SUMMARY:");
        let _ = writeln!(
            out,
            "  Issues to be tracked (fixedIssues = false):       {}",
            tally.unfixed
        );
        let _ = writeln!(
            out,
            "  Issues with fix descriptions (fixedIssues = text): {}",
            tally.other
        );
        rule(out);
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(ReportView::Full)
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, tally: &IssueTally) -> String {
        let mut out = String::new();
        self.write_header(&mut out, tally);

        match self.view {
            ReportView::Full => {
                self.write_presence(&mut out, tally);
                self.write_fix_status(&mut out, tally);
                self.write_other_values(&mut out, tally);
                self.write_unfixed_categories(&mut out, tally);
                self.write_skipped(&mut out, tally);
            }
            ReportView::FixDescriptions => {
                self.write_fix_status(&mut out, tally);
                self.write_other_values(&mut out, tally);
            }
        }

        self.write_summary(&mut out, tally);
        out
    }
}

fn rule(out: &mut String) {
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    rule(out);
    let _ = writeln!(out, "{title}:");
    rule(out);
}
