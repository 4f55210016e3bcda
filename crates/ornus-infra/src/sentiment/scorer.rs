//! Lexicon-based sentence polarity.

use std::sync::LazyLock;

use regex::Regex;

use ornus_core::ports::{SentimentError, SentimentScorer};

use super::lexicon::Lexicon;
use super::sentences::split_sentences;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:['’][A-Za-z]+)?").expect("valid word regex"));

/// Default number of tokens a negation reaches forward.
const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Flip and dampen a negated word, e.g. "not good" is mildly negative.
const NEGATION_FACTOR: f64 = -0.5;

/// Rule-based scorer: each sentence scores the mean polarity of its opinion words.
///
/// An intensifier scales the word right after it; a negation flips scored
/// words within a short window. Sentences without opinion words score `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    lexicon: Lexicon,
    negation_window: usize,
}

impl LexiconSentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Polarity of a single sentence in `[-1, 1]`.
    pub fn sentence_polarity(&self, sentence: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut multiplier = 1.0;
        let mut negated_for = 0usize;

        for token in WORD.find_iter(sentence) {
            let word = token.as_str().to_lowercase().replace('’', "'");

            if self.lexicon.is_negation(&word) {
                negated_for = self.negation_window;
                continue;
            }

            if let Some(m) = self.lexicon.intensifier(&word) {
                multiplier = m;
                negated_for = negated_for.saturating_sub(1);
                continue;
            }

            if let Some(base) = self.lexicon.polarity(&word) {
                let mut score = base * multiplier;
                if negated_for > 0 {
                    score *= NEGATION_FACTOR;
                }
                total += score;
                matched += 1;
            }

            multiplier = 1.0;
            negated_for = negated_for.saturating_sub(1);
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64).clamp(-1.0, 1.0)
    }
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> Result<Vec<f64>, SentimentError> {
        let scores: Vec<f64> = split_sentences(text)
            .into_iter()
            .map(|sentence| self.sentence_polarity(sentence))
            .collect();

        tracing::trace!(sentences = scores.len(), ?scores, "Scored text");

        Ok(scores)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
