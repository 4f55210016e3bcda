//! Polarity lexicon: scored words, intensifiers and negations.

use std::collections::{HashMap, HashSet};

/// General English opinion words plus common market vocabulary.
const POLARITY_WORDS: &[(&str, f64)] = &[
    // Positive
    ("love", 0.8),
    ("loved", 0.8),
    ("like", 0.3),
    ("great", 0.8),
    ("good", 0.7),
    ("nice", 0.6),
    ("excellent", 1.0),
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("fantastic", 0.9),
    ("best", 1.0),
    ("better", 0.5),
    ("happy", 0.8),
    ("win", 0.8),
    ("winning", 0.6),
    ("strong", 0.4),
    ("solid", 0.4),
    ("promising", 0.5),
    ("bullish", 0.7),
    ("bull", 0.5),
    ("buy", 0.3),
    ("gain", 0.5),
    ("gains", 0.5),
    ("profit", 0.6),
    ("profits", 0.6),
    ("rally", 0.6),
    ("surge", 0.6),
    ("soar", 0.7),
    ("soaring", 0.7),
    ("up", 0.2),
    ("beat", 0.4),
    ("record", 0.3),
    ("growth", 0.5),
    ("outperform", 0.6),
    ("upgrade", 0.6),
    ("moon", 0.7),
    // Negative
    ("hate", -0.8),
    ("bad", -0.7),
    ("terrible", -0.6),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("poor", -0.4),
    ("weak", -0.4),
    ("sad", -0.5),
    ("fear", -0.6),
    ("panic", -0.8),
    ("bearish", -0.7),
    ("bear", -0.5),
    ("sell", -0.3),
    ("loss", -0.6),
    ("losses", -0.6),
    ("lose", -0.6),
    ("losing", -0.6),
    ("crash", -0.9),
    ("plunge", -0.8),
    ("drop", -0.5),
    ("down", -0.2),
    ("miss", -0.4),
    ("downgrade", -0.6),
    ("underperform", -0.6),
    ("scam", -1.0),
    ("fraud", -1.0),
    ("bubble", -0.5),
    ("risky", -0.4),
    ("overvalued", -0.5),
];

/// Multipliers applied to the next scored word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.3),
    ("so", 1.2),
    ("totally", 1.3),
    ("absolutely", 1.5),
    ("highly", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
    ("barely", 0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "without", "isn't", "aren't", "wasn't", "weren't",
    "don't", "doesn't", "didn't", "can't", "cannot", "won't", "shouldn't", "wouldn't",
];

/// Word-level polarity lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Empty lexicon - every word scores as neutral.
    pub fn empty() -> Self {
        Self {
            polarity: HashMap::new(),
            intensifiers: HashMap::new(),
            negations: HashSet::new(),
        }
    }

    /// Add or override a scored word. Polarity is clamped to `[-1, 1]`.
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.polarity
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn with_intensifier(mut self, word: &str, multiplier: f64) -> Self {
        self.intensifiers.insert(word.to_lowercase(), multiplier);
        self
    }

    pub fn with_negation(mut self, word: &str) -> Self {
        self.negations.insert(word.to_lowercase());
        self
    }

    /// Polarity of a lowercased word, if it carries one.
    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let lexicon = POLARITY_WORDS
            .iter()
            .fold(Self::empty(), |lex, (word, score)| lex.with_word(word, *score));
        let lexicon = INTENSIFIERS
            .iter()
            .fold(lexicon, |lex, (word, m)| lex.with_intensifier(word, *m));
        NEGATIONS
            .iter()
            .fold(lexicon, |lex, word| lex.with_negation(word))
    }
}
