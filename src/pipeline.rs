//! Read tweets, turn their text into tokens, and count them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::TermError;
use crate::freq::FrequencyTable;
use crate::stopwords::StopwordSet;
use crate::tokenize::{Tokenizer, TweetTokenizer};

/// One line of input. Every field except `text` is ignored.
#[derive(Debug, Deserialize)]
pub struct Tweet {
    pub text: String,
}

/// What to do with a line that is not a valid tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Stop at the first bad line; nothing is reported.
    #[default]
    Abort,
    /// Log a warning and carry on with the next line.
    Skip,
}

/// Everything `process` needs, built once before reading input.
#[derive(Debug, Clone)]
pub struct PipelineConfig<T = TweetTokenizer> {
    pub tokenizer: T,
    pub stopwords: StopwordSet,
    pub on_invalid: ParsePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(TweetTokenizer::new(), StopwordSet::for_language("en"))
    }
}

impl<T: Tokenizer> PipelineConfig<T> {
    pub fn new(tokenizer: T, stopwords: StopwordSet) -> Self {
        Self {
            tokenizer,
            stopwords,
            on_invalid: ParsePolicy::Abort,
        }
    }

    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    /// [`process`] with this configuration's tokenizer and stopwords.
    pub fn process(&self, text: &str) -> Vec<String> {
        process(text, &self.tokenizer, &self.stopwords)
    }

    /// Count the terms of every tweet in `reader`, one JSON object per line.
    pub fn run_reader<R: BufRead>(&self, reader: R) -> Result<FrequencyTable, TermError> {
        let mut table = FrequencyTable::new();
        let mut processed = 0usize;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let tweet: Tweet = match serde_json::from_str(&line) {
                Ok(t) => t,
                Err(source) => match self.on_invalid {
                    ParsePolicy::Abort => return Err(TermError::Json { line: line_no, source }),
                    ParsePolicy::Skip => {
                        warn!("Skipping line {line_no}: {source}");
                        continue;
                    }
                },
            };
            table.update(self.process(&tweet.text));
            processed += 1;
        }
        debug!("{processed} tweets, {} distinct terms", table.len());
        Ok(table)
    }

    /// Open `path` and run [`Self::run_reader`] on it.
    pub fn run_path(&self, path: &Path) -> Result<FrequencyTable, TermError> {
        debug!("Reading tweets from {}", path.display());
        let file = File::open(path)?;
        let table = self.run_reader(BufReader::new(file))?;
        info!(
            "Counted {} terms ({} distinct) in {}",
            table.total(),
            table.len(),
            path.display()
        );
        Ok(table)
    }
}

/// Lowercase, tokenize, then drop stopwords and all-digit tokens.
/// Surviving tokens keep their order; duplicates are kept.
pub fn process<T: Tokenizer + ?Sized>(
    text: &str,
    tokenizer: &T,
    stopwords: &StopwordSet,
) -> Vec<String> {
    let text = text.to_lowercase();
    tokenizer
        .tokenize(&text)
        .into_iter()
        // decoded entities (`&#65;`) can reintroduce capitals
        .map(|tok| tok.to_lowercase())
        .filter(|tok| !stopwords.contains(tok) && !is_digits(tok))
        .collect()
}

// Decimal digits in any script, plus super- and subscript digits.
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Nd}\x{B2}\x{B3}\x{B9}\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}]+$")
        .unwrap()
});

fn is_digits(tok: &str) -> bool {
    DIGITS_RE.is_match(tok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config() -> PipelineConfig {
        PipelineConfig::new(
            TweetTokenizer::new(),
            StopwordSet::from_words(["the", "this", "out", "rt", "via", "...", "!", ":", ","]),
        )
    }

    #[test]
    fn process_filters_stopwords_digits_and_punctuation() {
        let toks = config().process("RT @bob: Check this out!!! 123 #cool");
        assert_eq!(toks, vec!["@bob", "check", "#cool"]);
    }

    #[test]
    fn process_with_default_stopwords() {
        let cfg = PipelineConfig::default();
        let toks = cfg.process("RT @bob: Check this out!!! 123 #cool");
        assert!(!toks.contains(&"rt".to_string()));
        assert!(!toks.contains(&"123".to_string()));
        assert!(toks.contains(&"@bob".to_string()));
        assert!(toks.contains(&"#cool".to_string()));
        assert!(toks.iter().all(|t| t != "!" && t != ":"));
    }

    #[test]
    fn process_lowercases_and_keeps_duplicates() {
        let toks = config().process("Rust RUST rust, Ferris");
        assert_eq!(toks, vec!["rust", "rust", "rust", "ferris"]);
    }

    #[test]
    fn process_edge_cases() {
        assert!(config().process("").is_empty());
        assert!(config().process("the 42 ... 7").is_empty());
        // digits in any script, including super- and subscripts
        assert!(config().process("٣٤").is_empty());
        assert!(config().process("²³ ₁₂").is_empty());
        // mixed tokens survive
        assert_eq!(config().process("4ever"), vec!["4ever"]);
        // numeric but not digits: fractions and roman numerals are kept
        assert_eq!(config().process("½ Ⅻ"), vec!["½", "ⅻ"]);
    }

    #[test]
    fn process_lowercases_decoded_entities() {
        assert_eq!(
            config().process("hello &#65;&#66;&#67; &#x44;ata"),
            vec!["hello", "abc", "data"]
        );
    }

    #[test]
    fn process_default_stopwords_keep_content_words() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.process("great new home"), vec!["great", "new", "home"]);
        assert_eq!(
            cfg.process("the world today and work information"),
            vec!["world", "today", "work", "information"]
        );
    }

    #[test]
    fn process_is_idempotent() {
        let cfg = config();
        let text = "Loving #RustLang :) via @ferris https://rust-lang.org";
        assert_eq!(cfg.process(text), cfg.process(text));
    }

    #[test]
    fn run_reader_counts_across_tweets() {
        let input = "{\"text\": \"big data\"}\n{\"text\": \"Data rules\", \"id\": 1}\n";
        let table = config().run_reader(Cursor::new(input)).unwrap();
        assert_eq!(table.get("data"), 2);
        assert_eq!(table.get("big"), 1);
        assert_eq!(table.get("rules"), 1);
    }

    #[test]
    fn run_reader_empty_input_and_empty_text() {
        assert!(config().run_reader(Cursor::new("")).unwrap().is_empty());
        let table = config().run_reader(Cursor::new("{\"text\": \"\"}\n")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn run_reader_aborts_on_bad_line() {
        let input = "{\"text\": \"fine\"}\nnot json\n{\"text\": \"later\"}\n";
        let err = config().run_reader(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, TermError::Json { line: 2, .. }));
    }

    #[test]
    fn run_reader_rejects_missing_text_field() {
        let err = config().run_reader(Cursor::new("{\"id\": 3}\n")).unwrap_err();
        assert!(matches!(err, TermError::Json { line: 1, .. }));
    }

    #[test]
    fn run_reader_skip_policy_continues() {
        let input = "{\"text\": \"fine\"}\nnot json\n{\"text\": \"fine again\"}\n";
        let table = config()
            .with_parse_policy(ParsePolicy::Skip)
            .run_reader(Cursor::new(input))
            .unwrap();
        assert_eq!(table.get("fine"), 2);
        assert_eq!(table.get("again"), 1);
    }

    #[test]
    fn run_path_missing_file_is_io_error() {
        let err = config().run_path(Path::new("/no/such/tweets.jsonl")).unwrap_err();
        assert!(matches!(err, TermError::Io(_)));
    }
}
