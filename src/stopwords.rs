//! Stopword set: language stopwords (the short NLTK function-word lists),
//! ASCII punctuation and a few tweet artefacts (`rt`, `via`, `...`).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::warn;
use stop_words::{LANGUAGE, get};

use crate::error::TermError;

/// Tokens that carry no meaning in a tweet stream.
pub const TWEET_EXTRAS: [&str; 3] = ["rt", "via", "..."];

/// Every ASCII punctuation character.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Read-only set of tokens excluded from counting. All entries are lowercase.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Stopwords for `language` plus punctuation and [`TWEET_EXTRAS`].
    /// Unknown language codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            other => {
                warn!("No stopword list for language {other:?}, using English");
                LANGUAGE::English
            }
        };

        let mut set = Self::from_words(get(lang).iter().map(|s| s.to_string()));
        set.extend(PUNCTUATION.chars().map(String::from));
        set.extend(TWEET_EXTRAS.iter().map(|s| s.to_string()));
        set
    }

    /// Build a set from exactly the given words (lowercased).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Add words (lowercased). Blank entries are ignored.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            let w = w.as_ref().trim();
            if !w.is_empty() {
                self.words.insert(w.to_lowercase());
            }
        }
    }

    /// Read additional stopwords from a text file, one per line.
    pub fn load_file(&mut self, path: &Path) -> Result<(), TermError> {
        let content = fs::read_to_string(path)?;
        self.extend(content.lines());
        Ok(())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn english_has_common_words_punctuation_and_extras() {
        let set = StopwordSet::for_language("en");
        for w in ["the", "and", "a", "rt", "via", "...", "!", ":", "#", "@", "\\"] {
            assert!(set.contains(w), "{w:?} should be a stopword");
        }
        assert!(!set.contains("#rustlang"));
        assert!(!set.contains("@bob"));
        assert!(!set.contains("rustacean"));
    }

    #[test]
    fn english_list_is_the_short_function_word_list() {
        let set = StopwordSet::for_language("en");
        for w in ["great", "new", "home", "world", "today", "work", "information", "http"] {
            assert!(!set.contains(w), "{w:?} should be counted");
        }
        // 179 function words, 32 punctuation marks, 3 extras
        assert!(set.len() < 250, "unexpectedly large list: {}", set.len());
    }

    #[test]
    fn punctuation_is_all_32_ascii_marks() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let set = StopwordSet::for_language("klingon");
        assert!(set.contains("the"));
    }

    #[test]
    fn from_words_lowercases_and_skips_blanks() {
        let set = StopwordSet::from_words(["Foo", "  ", "bar "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert!(StopwordSet::default().is_empty());
    }

    #[test]
    fn load_file_adds_lines() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "Lorem\n\nipsum").unwrap();
        let mut set = StopwordSet::default();
        set.load_file(f.path()).unwrap();
        assert!(set.contains("lorem"));
        assert!(set.contains("ipsum"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let mut set = StopwordSet::default();
        let err = set.load_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, TermError::Io(_)));
    }
}
