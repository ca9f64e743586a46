#![forbid(unsafe_code)]
//! # Tweet Terms
//!
//! Term frequencies for a collection of tweets stored as line-delimited JSON.
//!
//! Each tweet's `text` is lowercased, split with a tweet-aware tokenizer
//! (hashtags, mentions, emoticons and URLs stay whole), filtered against a
//! stopword set and counted. The most frequent terms are printed and the top
//! counts are drawn as a bar chart.
//!
//! ## Example
//! ```
//! use std::io::Cursor;
//! use tweet_terms::{PipelineConfig, StopwordSet, TweetTokenizer, format_top};
//!
//! let config = PipelineConfig::new(TweetTokenizer::new(), StopwordSet::from_words(["the", "!"]));
//! let input = "{\"text\": \"The #rust book!\"}\n{\"text\": \"#Rust again\"}\n";
//! let table = config.run_reader(Cursor::new(input)).unwrap();
//! assert_eq!(table.get("#rust"), 2);
//! assert_eq!(format_top(&table, 1), "#rust: 2\n");
//! ```

pub mod error;
pub mod freq;
pub mod pipeline;
pub mod report;
pub mod stopwords;
pub mod tokenize;

pub use error::TermError;
pub use freq::FrequencyTable;
pub use pipeline::{ParsePolicy, PipelineConfig, Tweet, process};
pub use report::{CHART_FILE, PLOT_TOP, PRINT_TOP, format_top, plot_top, write_top};
pub use stopwords::StopwordSet;
pub use tokenize::{Tokenizer, TweetTokenizer};
