//! Decoding of the JSON carried in the `data` column and the predicates that
//! read it.

use crate::error::DecodeError;
use crate::types::Bucket;
use serde_json::{Map, Value};

pub const IDENTIFIED_ISSUES_FIELD: &str = "identifiedIssues";
pub const FIXED_ISSUES_FIELD: &str = "fixedIssues";
pub const CATEGORY_LIST_FIELD: &str = "list";

/// Decoded `data` column of an activity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Label of the first category descriptor in `list`.
    ///
    /// Returns `None` when the list is absent, empty, or its first entry has no
    /// usable `name`. Non-string names are rendered as compact JSON.
    pub fn first_category(&self) -> Option<String> {
        let name = self
            .field(CATEGORY_LIST_FIELD)?
            .as_array()?
            .first()?
            .as_object()?
            .get("name")?;

        match name {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Decode the raw `data` text of a record into a payload.
pub fn decode_payload(raw: &str) -> Result<Payload, DecodeError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(fields) => Ok(Payload { fields }),
        other => Err(DecodeError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whether the payload reports identified issues.
///
/// Exactly three forms mean "no issues": the field is absent, `null`, or
/// `false`. Every other value, including `""`, `0` and `[]`, counts as issues
/// being present.
pub fn has_identified_issues(payload: &Payload) -> bool {
    !matches!(
        payload.field(IDENTIFIED_ISSUES_FIELD),
        None | Some(Value::Null) | Some(Value::Bool(false))
    )
}

/// Observed forms of the loosely typed `fixedIssues` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixStatus {
    BooleanTrue,
    BooleanFalse,
    StringTrue,
    StringFalse,
    /// Any other value, stringified and truncated
    Other(String),
}

impl FixStatus {
    /// Resolve the `fixedIssues` field of a payload, first match wins.
    pub fn from_payload(payload: &Payload, value_limit: usize) -> Self {
        Self::from_value(payload.field(FIXED_ISSUES_FIELD), value_limit)
    }

    pub fn from_value(value: Option<&Value>, value_limit: usize) -> Self {
        match value {
            Some(Value::Bool(true)) => Self::BooleanTrue,
            Some(Value::String(s)) if s == "true" => Self::StringTrue,
            Some(Value::Bool(false)) => Self::BooleanFalse,
            Some(Value::String(s)) if s == "false" => Self::StringFalse,
            other => Self::Other(truncate_chars(&stringify(other), value_limit)),
        }
    }

    pub fn bucket(&self) -> Bucket {
        match self {
            Self::BooleanTrue | Self::StringTrue => Bucket::Fixed,
            Self::BooleanFalse | Self::StringFalse => Bucket::Unfixed,
            Self::Other(_) => Bucket::Other,
        }
    }
}

/// Text form of a field value: strings verbatim, absent and `null` as `null`,
/// everything else as compact JSON.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Keep at most `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
