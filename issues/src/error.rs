use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for issue analysis operations
pub type Result<T> = std::result::Result<T, IssuesError>;

/// Errors that abort an analysis run
#[derive(Debug, Error)]
pub enum IssuesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Required column '{column}' is missing from the input header")]
    MissingColumn { column: String },

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<IssuesError>),
}

impl IssuesError {
    /// Create a new missing column error
    pub fn missing_column<S: Into<String>>(column: S) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("File operation failed: {err}"),
            Self::Csv(err) => format!("Failed to read CSV input: {err}"),
            Self::InputNotFound { path } => format!("Input file not found: {}", path.display()),
            Self::MissingColumn { column } => {
                format!("The input has no '{column}' column; is this an activity export?")
            }
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Why a record's `data` column could not be turned into a payload.
///
/// These are record-level failures: the record is skipped and the run continues.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
