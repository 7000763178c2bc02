//! Word tally: split text into sentences and count target words.

mod error;
mod logging;
mod report;
mod server;
mod tally;
mod text;
mod tokenize;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;

use crate::error::TallyError;
use crate::logging::LogLevel;
use crate::text::Text;

#[derive(Parser)]
#[command(name = "word-tally")]
#[command(about = "Count target words per sentence and in total; runs a demo without a subcommand")]
struct Cli {
    /// Log verbosity.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Count target words in a text.
    Count {
        #[command(flatten)]
        source: TextSource,

        /// Target words (default: built-in sample words).
        #[arg(long, short, num_args = 1.., conflicts_with = "words_file")]
        words: Vec<String>,

        /// File with one target word per line.
        #[arg(long)]
        words_file: Option<PathBuf>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print each normalized sentence with its tokens.
    Sentences {
        #[command(flatten)]
        source: TextSource,
    },

    /// Serve the counter over HTTP.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value_t = 3000)]
        port: u16,
    },
}

#[derive(Args)]
struct TextSource {
    /// Text to analyze (default: built-in sample text).
    #[arg(long, short, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file.
    #[arg(long, short)]
    file: Option<PathBuf>,
}

impl TextSource {
    fn load(&self) -> Result<String, TallyError> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_file(path),
            (None, None) => Ok(tally::SAMPLE_TEXT.to_string()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    logging::initialize(cli.log_level.into());
    match cli.command {
        None => run_demo(),
        Some(Command::Count { source, words, words_file, json }) => {
            let text = source.load()?;
            let words = load_words(words, words_file.as_deref())?;
            run_count(&text, &words, json)?;
        }
        Some(Command::Sentences { source }) => {
            print!("{}", format_sentences(&Text::new(&source.load()?)));
        }
        Some(Command::Serve { port }) => {
            server::run(port)?;
        }
    }
    Ok(())
}

fn run_demo() {
    let results = tally::process(tally::SAMPLE_TEXT, &tally::SAMPLE_WORDS);
    print!("{}", report::render_console(&results));
}

fn run_count(text: &str, words: &[String], json: bool) -> Result<(), TallyError> {
    info!("counting {} word(s)", words.len());
    let results = tally::process(text, words);
    if json {
        println!("{}", report::render_json(&results)?);
    } else {
        print!("{}", report::render_console(&results));
    }
    Ok(())
}

/// One numbered line per sentence: `1. <text> -> ["token", ...]`.
fn format_sentences(text: &Text) -> String {
    text.sentences()
        .iter()
        .enumerate()
        .map(|(i, sentence)| format!("{}. {} -> {:?}\n", i + 1, sentence.as_str(), sentence.words()))
        .collect()
}

fn load_words(words: Vec<String>, words_file: Option<&Path>) -> Result<Vec<String>, TallyError> {
    if let Some(path) = words_file {
        return Ok(parse_word_list(&read_file(path)?));
    }
    if words.is_empty() {
        return Ok(tally::SAMPLE_WORDS.iter().map(|w| w.to_string()).collect());
    }
    Ok(words)
}

/// One word per line; surrounding whitespace trimmed, blank lines skipped.
fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_file(path: &Path) -> Result<String, TallyError> {
    fs::read_to_string(path).map_err(|source| TallyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_list_skips_blank_lines() {
        assert_eq!(
            parse_word_list("python\n\n  легко \r\n\t\nосновы\n"),
            vec!["python", "легко", "основы"]
        );
    }

    #[test]
    fn words_default_to_sample() {
        let words = load_words(Vec::new(), None).unwrap();
        assert_eq!(words, tally::SAMPLE_WORDS.to_vec());
    }

    #[test]
    fn explicit_words_are_kept_in_order() {
        let words = load_words(vec!["b".into(), "a".into()], None).unwrap();
        assert_eq!(words, vec!["b", "a"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_file(Path::new("/nonexistent/word-tally.txt")).unwrap_err();
        assert!(matches!(err, TallyError::Io { .. }));
        assert!(err.to_string().contains("word-tally.txt"));
    }

    #[test]
    fn text_source_prefers_inline_text() {
        let source = TextSource { text: Some("Hi.".into()), file: None };
        assert_eq!(source.load().unwrap(), "Hi.");
        let source = TextSource { text: None, file: None };
        assert_eq!(source.load().unwrap(), tally::SAMPLE_TEXT);
    }

    #[test]
    fn cli_parses_count_flags() {
        let cli = Cli::try_parse_from([
            "word-tally", "--log-level", "debug", "count", "--text", "A a.", "--words", "a", "b", "--json",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Some(Command::Count { source, words, json, .. }) => {
                assert_eq!(source.text.as_deref(), Some("A a."));
                assert_eq!(words, vec!["a", "b"]);
                assert!(json);
            }
            _ => panic!("expected count command"),
        }
    }

    #[test]
    fn sentences_are_numbered_with_tokens() {
        let text = Text::new("Hello,  World! snake_case 42?");
        assert_eq!(
            format_sentences(&text),
            "1. Hello, World -> [\"hello\", \"world\"]\n\
             2. snake_case 42 -> [\"snake_case\", \"42\"]\n"
        );
    }

    #[test]
    fn no_sentences_format_to_empty_output() {
        assert_eq!(format_sentences(&Text::new(" ... ")), "");
    }

    #[test]
    fn cli_without_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["word-tally"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
