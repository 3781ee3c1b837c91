//! Aggregates accumulated over a single pass of the classifier

use crate::types::{Example, SkippedRecord};
use serde::Serialize;
use std::collections::HashMap;

/// A distinct value of `fixedIssues` that is neither true-like nor false-like
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherValue {
    pub value: String,
    pub count: u64,
    pub examples: Vec<Example>,
}

/// Number of unfixed issues filed under one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Counters and frequency tables for one analysis run.
///
/// Tables keep first-seen order internally so that sorting by count leaves
/// ties in input order.
#[derive(Debug, Clone, Default)]
pub struct IssueTally {
    pub total_inspections: u64,
    pub decode_failures: u64,
    pub no_identified_issues: u64,
    pub fixed: u64,
    pub unfixed: u64,
    pub other: u64,
    other_values: Vec<OtherValue>,
    other_index: HashMap<String, usize>,
    unfixed_categories: Vec<CategoryCount>,
    category_index: HashMap<String, usize>,
    skipped_records: Vec<SkippedRecord>,
}

impl IssueTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_inspection(&mut self) {
        self.total_inspections += 1;
    }

    pub(crate) fn record_decode_failure(&mut self, skipped: Option<SkippedRecord>) {
        self.decode_failures += 1;
        if let Some(skipped) = skipped {
            self.skipped_records.push(skipped);
        }
    }

    pub(crate) fn record_no_issues(&mut self) {
        self.no_identified_issues += 1;
    }

    pub(crate) fn record_fixed(&mut self) {
        self.fixed += 1;
    }

    pub(crate) fn record_unfixed(&mut self, category: String) {
        self.unfixed += 1;
        match self.category_index.get(&category) {
            Some(&i) => self.unfixed_categories[i].count += 1,
            None => {
                self.category_index
                    .insert(category.clone(), self.unfixed_categories.len());
                self.unfixed_categories.push(CategoryCount { category, count: 1 });
            }
        }
    }

    pub(crate) fn record_other(&mut self, value: String, activity_id: &str, max_examples: usize) {
        self.other += 1;
        let i = match self.other_index.get(&value) {
            Some(&i) => i,
            None => {
                let i = self.other_values.len();
                self.other_index.insert(value.clone(), i);
                self.other_values.push(OtherValue {
                    value,
                    count: 0,
                    examples: Vec::new(),
                });
                i
            }
        };

        let entry = &mut self.other_values[i];
        entry.count += 1;
        if entry.examples.len() < max_examples {
            entry.examples.push(Example {
                activity_id: activity_id.to_string(),
                value: entry.value.clone(),
            });
        }
    }

    /// Inspection records that reported identified issues
    pub fn with_identified_issues(&self) -> u64 {
        self.fixed + self.unfixed + self.other
    }

    /// Sum of every outcome an inspection record can have
    pub fn accounted_inspections(&self) -> u64 {
        self.decode_failures + self.no_identified_issues + self.with_identified_issues()
    }

    /// Distinct other-values, most frequent first
    pub fn other_values(&self) -> Vec<&OtherValue> {
        let mut values: Vec<&OtherValue> = self.other_values.iter().collect();
        values.sort_by(|a, b| b.count.cmp(&a.count));
        values
    }

    pub fn other_value(&self, value: &str) -> Option<&OtherValue> {
        self.other_index.get(value).map(|&i| &self.other_values[i])
    }

    /// Unfixed issue categories, most frequent first
    pub fn unfixed_categories(&self) -> Vec<&CategoryCount> {
        let mut categories: Vec<&CategoryCount> = self.unfixed_categories.iter().collect();
        categories.sort_by(|a, b| b.count.cmp(&a.count));
        categories
    }

    pub fn unfixed_in_category(&self, category: &str) -> u64 {
        self.category_index
            .get(category)
            .map_or(0, |&i| self.unfixed_categories[i].count)
    }

    /// Records skipped for an undecodable payload, kept only when reporting is enabled
    pub fn skipped_records(&self) -> &[SkippedRecord] {
        &self.skipped_records
    }

    pub fn is_empty(&self) -> bool {
        self.total_inspections == 0
    }
}
