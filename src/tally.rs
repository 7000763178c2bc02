//! Count target words across a text and rank them by total.

use std::cmp::Reverse;

use log::debug;

use crate::text::Text;

/// Built-in sample used when no text is given.
pub const SAMPLE_TEXT: &str = "Python – мощный язык программирования. \
    Программирование на Python легко и весело! \
    Изучение Python помогает понять основы программирования.";

/// Built-in target words for the sample text.
pub const SAMPLE_WORDS: [&str; 4] = ["python", "программирования", "легко", "основы"];

/// Result row for one target word, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WordTally {
    pub word: String,
    pub total: usize,
    pub per_sentence: Vec<usize>,
}

/// Count every target in `raw`, sorted by total descending.
/// Duplicated targets get their own rows; ties keep input order.
pub fn process<S: AsRef<str>>(raw: &str, targets: &[S]) -> Vec<WordTally> {
    let text = Text::new(raw);
    let mut tallies: Vec<WordTally> = targets
        .iter()
        .map(|target| {
            let word = target.as_ref();
            let count = text.count_word(word);
            WordTally {
                word: word.to_string(),
                total: count.total,
                per_sentence: count.per_sentence,
            }
        })
        .collect();
    // sort_by_key is stable
    tallies.sort_by_key(|t| Reverse(t.total));
    debug!(
        "counted {} target(s) over {} sentence(s)",
        tallies.len(),
        text.sentences().len()
    );
    tallies
}
