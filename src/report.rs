//! Console and JSON rendering of tally results.

use crate::error::TallyError;
use crate::tally::WordTally;

pub const HEADER: &str = "Результаты поиска:";

/// `Слово: '<word>' | Общее количество: <total> | По предложениям: [..]`
pub fn format_line(tally: &WordTally) -> String {
    format!(
        "Слово: '{}' | Общее количество: {} | По предложениям: {:?}",
        tally.word, tally.total, tally.per_sentence
    )
}

/// Header followed by one line per result, newline terminated.
pub fn render_console(tallies: &[WordTally]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for tally in tallies {
        out.push_str(&format_line(tally));
        out.push('\n');
    }
    out
}

pub fn render_json(tallies: &[WordTally]) -> Result<String, TallyError> {
    Ok(serde_json::to_string_pretty(tallies)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally::process;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_matches_console_format() {
        let tally = WordTally {
            word: "cats".to_string(),
            total: 2,
            per_sentence: vec![1, 1, 0],
        };
        assert_eq!(
            format_line(&tally),
            "Слово: 'cats' | Общее количество: 2 | По предложениям: [1, 1, 0]"
        );
    }

    #[test]
    fn console_output_has_header_and_sorted_lines() {
        let tallies = process("Hello, world! Hello again.", &["world", "hello"]);
        assert_eq!(
            render_console(&tallies),
            "Результаты поиска:\n\
             Слово: 'hello' | Общее количество: 2 | По предложениям: [1, 1]\n\
             Слово: 'world' | Общее количество: 1 | По предложениям: [1, 0]\n"
        );
    }

    #[test]
    fn empty_results_print_header_only() {
        assert_eq!(render_console(&[]), "Результаты поиска:\n");
    }

    #[test]
    fn json_uses_snake_case_fields() {
        let tallies = process("A a A.", &["a"]);
        let json = render_json(&tallies).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "word": "a", "total": 3, "per_sentence": [3] }])
        );
    }
}
