use serde::{Deserialize, Serialize};

/// Column carrying the activity category tag
pub const TYPE_COLUMN: &str = "type";
/// Column carrying the opaque activity identifier
pub const ACTIVITY_ID_COLUMN: &str = "activityId";
/// Column carrying the JSON payload
pub const DATA_COLUMN: &str = "data";

/// One row of an activity export
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "activityId", default)]
    pub activity_id: String,
    #[serde(default = "empty_object")]
    pub data: String,
}

fn empty_object() -> String {
    "{}".to_string()
}

impl Record {
    pub fn new<K, A, D>(kind: K, activity_id: A, data: D) -> Self
    where
        K: Into<String>,
        A: Into<String>,
        D: Into<String>,
    {
        Self {
            kind: kind.into(),
            activity_id: activity_id.into(),
            data: data.into(),
        }
    }
}

/// Remediation bucket a record with identified issues falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Fixed,
    Unfixed,
    Other,
}

/// What happened to a single record fed to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not an inspection record; nothing was counted
    NotInspection,
    /// Inspection record whose payload could not be decoded
    Undecodable,
    /// Inspection record without identified issues
    NoIdentifiedIssues,
    /// Inspection record with identified issues, classified by fix status
    Classified(Bucket),
}

/// An activity recorded as an example of a distinct fix-status value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub activity_id: String,
    pub value: String,
}

/// An inspection record skipped because its payload did not decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub activity_id: String,
    pub reason: String,
}
