use std::sync::Arc;

/// Sentiment scorer trait - abstraction over polarity backends (lexicon, ML model).
///
/// Implementations split the text into sentences and return one polarity
/// per sentence, each in `[-1, 1]`. An empty vector means the text held no
/// sentences.
pub trait SentimentScorer: Send + Sync {
    /// Score each sentence of `text`.
    fn score(&self, text: &str) -> Result<Vec<f64>, SentimentError>;

    /// Short backend name, used in diagnostics.
    fn name(&self) -> &str;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> Result<Vec<f64>, SentimentError> {
        (**self).score(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Box<T> {
    fn score(&self, text: &str) -> Result<Vec<f64>, SentimentError> {
        (**self).score(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Arc<T> {
    fn score(&self, text: &str) -> Result<Vec<f64>, SentimentError> {
        (**self).score(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Sentiment backend errors.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Polarity out of range: {0}")]
    PolarityOutOfRange(f64),
}
