//! Pure business logic for classifying inspection records
//! No presentation concerns - accumulates structured data only

use crate::config::{ClassifierConfig, DecodeErrorPolicy};
use crate::payload::{decode_payload, has_identified_issues, FixStatus};
use crate::tally::IssueTally;
use crate::types::{Outcome, Record, SkippedRecord};

/// Single-pass classifier feeding an [`IssueTally`]
#[derive(Debug, Default)]
pub struct IssueClassifier {
    config: ClassifierConfig,
    tally: IssueTally,
}

impl IssueClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            tally: IssueTally::new(),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Whether a record belongs to the inspection category
    pub fn is_inspection(&self, record: &Record) -> bool {
        record.kind == self.config.inspection_type
    }

    /// Classify one record and fold it into the tally
    pub fn observe(&mut self, record: &Record) -> Outcome {
        if !self.is_inspection(record) {
            return Outcome::NotInspection;
        }
        self.tally.record_inspection();

        let payload = match decode_payload(&record.data) {
            Ok(payload) => payload,
            Err(err) => {
                let skipped = match self.config.on_decode_error {
                    DecodeErrorPolicy::SkipSilent => None,
                    DecodeErrorPolicy::SkipAndReport => Some(SkippedRecord {
                        activity_id: record.activity_id.clone(),
                        reason: err.to_string(),
                    }),
                };
                self.tally.record_decode_failure(skipped);
                return Outcome::Undecodable;
            }
        };

        if !has_identified_issues(&payload) {
            self.tally.record_no_issues();
            return Outcome::NoIdentifiedIssues;
        }

        let status = FixStatus::from_payload(&payload, self.config.value_limit);
        let bucket = status.bucket();
        match status {
            FixStatus::BooleanTrue | FixStatus::StringTrue => self.tally.record_fixed(),
            FixStatus::BooleanFalse | FixStatus::StringFalse => {
                let category = payload
                    .first_category()
                    .unwrap_or_else(|| self.config.unknown_category.clone());
                self.tally.record_unfixed(category);
            }
            FixStatus::Other(value) => {
                self.tally
                    .record_other(value, &record.activity_id, self.config.max_examples)
            }
        }

        Outcome::Classified(bucket)
    }

    pub fn tally(&self) -> &IssueTally {
        &self.tally
    }

    /// End the pass and hand over the aggregates
    pub fn finish(self) -> IssueTally {
        self.tally
    }
}

/// Classify every record of an in-memory sequence
pub fn classify_records<'a, I>(records: I, config: ClassifierConfig) -> IssueTally
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut classifier = IssueClassifier::new(config);
    for record in records {
        classifier.observe(record);
    }
    classifier.finish()
}
