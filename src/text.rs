//! Text and Sentence: immutable decomposition of an input string.

use std::fmt;

use log::debug;

use crate::tokenize;

/// One sentence: its normalized text and lowercased word tokens in source order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Sentence {
    text: String,
    words: Vec<String>,
}

impl Sentence {
    pub fn new(raw: &str) -> Self {
        let text = tokenize::normalize(raw);
        let words = tokenize::split_words(&text);
        Self { text, words }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whole-token, case-insensitive occurrences of `target`.
    pub fn count_word(&self, target: &str) -> usize {
        let target = target.to_lowercase();
        self.words.iter().filter(|w| **w == target).count()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Occurrences of one word: per sentence (zeros kept) and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordCount {
    pub total: usize,
    pub per_sentence: Vec<usize>,
}

/// Normalized input text split into sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    text: String,
    sentences: Vec<Sentence>,
}

impl Text {
    pub fn new(raw: &str) -> Self {
        let text = tokenize::normalize(raw);
        let sentences: Vec<Sentence> = tokenize::split_sentences(&text)
            .iter()
            .map(|s| Sentence::new(s))
            .collect();
        debug!(
            "text of {} chars split into {} sentence(s)",
            text.chars().count(),
            sentences.len()
        );
        Self { text, sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn count_word(&self, target: &str) -> WordCount {
        let per_sentence: Vec<usize> = self
            .sentences
            .iter()
            .map(|s| s.count_word(target))
            .collect();
        let total = per_sentence.iter().sum();
        WordCount { total, per_sentence }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
