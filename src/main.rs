#![forbid(unsafe_code)]
//! # Tweet Terms CLI
//!
//! Reads a file of tweets (one JSON object per line), prints the most frequent
//! terms as `term: count` and saves a bar chart of the top counts.
//!
//! ## Example
//! ```bash
//! cargo run --release -- tweets.jsonl
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process;
use tweet_terms::{
    CHART_FILE, PLOT_TOP, PRINT_TOP, ParsePolicy, PipelineConfig, StopwordSet, TermError,
    TweetTokenizer, plot_top, write_top,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File with one JSON tweet per line
    path: PathBuf,

    /// Number of terms printed to stdout
    #[arg(long, default_value_t = PRINT_TOP)]
    top: usize,

    /// Number of bars in the chart
    #[arg(long, default_value_t = PLOT_TOP)]
    plot_top: usize,

    /// Chart output file (PNG)
    #[arg(long, default_value = CHART_FILE)]
    output: PathBuf,

    /// Stopword language (en, de, fr, es, it, pt, nl, ru, sv)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Skip lines that are not valid tweets instead of aborting
    #[arg(long, default_value_t = false)]
    skip_invalid: bool,

    /// Shorten characters repeated 3+ times to three ("sooooo" -> "sooo")
    #[arg(long, default_value_t = false)]
    reduce_len: bool,

    /// Drop @user mentions
    #[arg(long, default_value_t = false)]
    strip_handles: bool,
}

fn run(cli: &Cli) -> Result<(), TermError> {
    let mut stopwords = StopwordSet::for_language(&cli.lang);
    if let Some(extra) = &cli.stopwords {
        stopwords.load_file(extra)?;
    }
    let tokenizer = TweetTokenizer::new()
        .with_reduce_len(cli.reduce_len)
        .with_strip_handles(cli.strip_handles);
    let policy = if cli.skip_invalid {
        ParsePolicy::Skip
    } else {
        ParsePolicy::Abort
    };
    let config = PipelineConfig::new(tokenizer, stopwords).with_parse_policy(policy);

    let table = config.run_path(&cli.path)?;
    write_top(&table, cli.top, io::stdout().lock())?;
    plot_top(&table, cli.plot_top, &cli.output)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        process::exit(1);
    }
}
