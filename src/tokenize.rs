//! Text decomposition: whitespace normalization, sentence split, word split.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminators. Each character ends a sentence on its own.
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Unicode `\w+`: letters of any script with their combining marks, digits, connectors.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Unicode whitespace plus the ASCII separators U+001C..U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim and collapse every whitespace run (tabs, newlines included) into one space.
pub fn normalize(raw: &str) -> String {
    raw.split(is_space)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on `.`, `!` or `?`. Segments are trimmed, empty ones dropped.
pub fn split_sentences(normalized: &str) -> Vec<String> {
    let sentences: Vec<String> = normalized
        .split(SENTENCE_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    trace!("split {} sentence(s)", sentences.len());
    sentences
}

/// Maximal runs of word characters (any script, digits, underscore), lowercased.
pub fn split_words(sentence: &str) -> Vec<String> {
    WORD.find_iter(sentence)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
