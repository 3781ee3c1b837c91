//! Issues - classification of inspection findings from activity exports
//!
//! Reads the rows of an activity export, decodes the JSON payload carried by
//! each inspection, classifies remediation status and aggregates frequency
//! and example tables for reporting.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod classifier;
pub mod payload;
pub mod report;
pub mod source;
pub mod tally;

// Re-export main types for convenience
pub use classifier::{classify_records, IssueClassifier};
pub use config::{ClassifierConfig, DecodeErrorPolicy};
pub use error::{DecodeError, IssuesError, Result};
pub use payload::{decode_payload, has_identified_issues, FixStatus, Payload};
pub use report::{JsonRenderer, ReportRenderer, ReportView, TextRenderer};
pub use source::RecordReader;
pub use tally::{CategoryCount, IssueTally, OtherValue};
pub use types::{Bucket, Example, Outcome, Record, SkippedRecord};

use std::io::Read;
use std::path::Path;

/// Row counts reported by the reader alongside the tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub rows_read: u64,
    pub rows_unreadable: u64,
}

/// Classify every record produced by a reader in a single forward pass
pub fn analyze<R: Read>(
    mut reader: RecordReader<R>,
    config: ClassifierConfig,
) -> Result<(IssueTally, ScanStats)> {
    let mut classifier = IssueClassifier::new(config);
    while let Some(record) = reader.next_record()? {
        classifier.observe(&record);
    }

    let stats = ScanStats {
        rows_read: reader.rows_read(),
        rows_unreadable: reader.rows_unreadable(),
    };
    Ok((classifier.finish(), stats))
}

/// Classify the activity export at `path`
pub fn analyze_path<P: AsRef<Path>>(
    path: P,
    config: ClassifierConfig,
) -> Result<(IssueTally, ScanStats)> {
    analyze(RecordReader::from_path(path)?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_in_memory_export() {
        let csv = "type,activityId,data\n\
                   INSPECTION,1,\"{\"\"identifiedIssues\"\": true, \"\"fixedIssues\"\": true}\"\n\
                   VISIT,2,{}\n";
        let reader = RecordReader::from_reader(csv.as_bytes()).unwrap();
        let (tally, stats) = analyze(reader, ClassifierConfig::default()).unwrap();

        assert_eq!(stats, ScanStats { rows_read: 2, rows_unreadable: 0 });
        assert_eq!(tally.total_inspections, 1);
        assert_eq!(tally.fixed, 1);
    }
}
