//! # Ornus Infrastructure
//!
//! Concrete implementations of the ports defined in `ornus-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No bundled scorer
//! - `lexicon` - Rule-based English sentiment scorer

#[cfg(feature = "lexicon")]
pub mod sentiment;

// Re-exports
#[cfg(feature = "lexicon")]
pub use sentiment::{Lexicon, LexiconSentimentScorer, split_sentences};
