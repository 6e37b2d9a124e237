use arrow::error::ArrowError;
use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const INTERNAL_ERROR_STATUS_CODE: u16 = 500;

/// Body record returned by the handler. `shape` is `(rows, columns)` and
/// serializes as a two-element array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameSummary {
    pub sum: i64,
    pub shape: (usize, usize),
}

impl FrameSummary {
    pub fn row_count(&self) -> usize {
        self.shape.0
    }

    pub fn column_count(&self) -> usize {
        self.shape.1
    }

    pub fn to_json(&self) -> Result<String, SummaryError> {
        serde_json::to_string(self)
            .map_err(|error| SummaryError::new(format!("failed to serialize summary: {error}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryError {
    message: String,
}

impl SummaryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SummaryError {}

impl From<ArrowError> for SummaryError {
    fn from(error: ArrowError) -> Self {
        Self::new(format!("arrow error: {error}"))
    }
}
