//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod sentiment;

pub use sentiment::{SentimentError, SentimentScorer};
