//! Raw post input - a single object, a JSON array, or one object per line.

use ornus_core::{RawPost, TransformError, TransformResult};
use serde_json::Value;

/// Parse every post in `input`, in order.
///
/// A whole-document parse is tried first. If that fails and every non-blank
/// line opens an object, the input is read as newline-delimited JSON where
/// each bad line fails on its own. Anything else is one broken document.
pub fn parse_posts(input: &str) -> Vec<TransformResult<RawPost>> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(input) {
        Ok(Value::Array(items)) => items.into_iter().map(RawPost::new).collect(),
        Ok(value) => vec![RawPost::new(value)],
        Err(_) if is_json_lines(input) => non_blank_lines(input)
            .map(RawPost::from_json_str)
            .collect(),
        Err(e) => vec![Err(e.into())],
    }
}

fn non_blank_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.trim().is_empty())
}

fn is_json_lines(input: &str) -> bool {
    non_blank_lines(input).all(|line| line.trim_start().starts_with('{'))
}

/// Short description of a post-level failure for logs.
pub fn describe(err: &TransformError) -> &'static str {
    match err {
        TransformError::MissingField { .. } => "missing_field",
        TransformError::InvalidField { .. } => "invalid_field",
        TransformError::MalformedDate { .. } => "malformed_date",
        TransformError::EmptyText => "empty_text",
        TransformError::Sentiment(_) => "sentiment",
        TransformError::InvalidJson(_) => "invalid_json",
    }
}
