//! Sentiment scoring - a lexicon-based implementation of `SentimentScorer`.

mod lexicon;
mod scorer;
mod sentences;

pub use lexicon::Lexicon;
pub use scorer::LexiconSentimentScorer;
pub use sentences::split_sentences;
