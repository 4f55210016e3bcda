//! Sentence splitting.

use std::sync::LazyLock;

use regex::Regex;

/// A run of terminal punctuation followed by whitespace or end of text.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(\s+|$)").expect("valid sentence regex"));

/// Split text into trimmed, non-empty sentences.
///
/// Text without terminal punctuation is a single sentence; blank text has none.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        push_trimmed(&mut sentences, &text[start..boundary.end()]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'t>(sentences: &mut Vec<&'t str>, fragment: &'t str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment);
    }
}
