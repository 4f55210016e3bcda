//! Domain-level error types.

use thiserror::Error;

use crate::ports::SentimentError;

/// Transformation errors - a post either normalizes fully or fails with one of these.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Missing field: {path}")]
    MissingField { path: String },

    #[error("Invalid field: {path} is not {expected}")]
    InvalidField { path: String, expected: &'static str },

    #[error("Malformed date: {input:?} ({reason})")]
    MalformedDate { input: String, reason: String },

    #[error("Text contains no sentences to score")]
    EmptyText,

    #[error("Sentiment scoring failed: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl TransformError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            path: path.into(),
            expected,
        }
    }

    pub(crate) fn malformed_date(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

/// Result type alias for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;
