/// What to do with an inspection record whose `data` column does not decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeErrorPolicy {
    /// Count the record as undecodable and move on
    SkipSilent,
    /// Count the record and keep its activity id and the failure reason
    #[default]
    SkipAndReport,
}

/// Configuration options for classification and aggregation
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub inspection_type: String,
    pub value_limit: usize,
    pub max_examples: usize,
    pub unknown_category: String,
    pub on_decode_error: DecodeErrorPolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            inspection_type: "INSPECTION".to_string(),
            value_limit: 100,
            max_examples: 3,
            unknown_category: "Unknown".to_string(),
            on_decode_error: DecodeErrorPolicy::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn with_inspection_type<S: Into<String>>(mut self, inspection_type: S) -> Self {
        self.inspection_type = inspection_type.into();
        self
    }

    pub fn with_value_limit(mut self, value_limit: usize) -> Self {
        self.value_limit = value_limit;
        self
    }

    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    pub fn with_decode_error_policy(mut self, policy: DecodeErrorPolicy) -> Self {
        self.on_decode_error = policy;
        self
    }
}
