//! Tweet-aware tokenization.
//!
//! [`TweetTokenizer`] keeps the constructs that matter in short social-media
//! text together: `@handles`, `#hashtags`, URLs and bare domains, phone
//! numbers, e-mail addresses, ASCII emoticons such as `:-)` or `<3`, and emoji
//! sequences. Everything else is split into words, numbers and single
//! punctuation characters.

use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex, RegexBuilder};

/// Something that splits raw text into tokens.
///
/// Implementations must accept any `&str` without failing.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// Order matters: the first alternative that matches at a position wins.
const URLS: &str = r#"(?:https?:(?:/{1,3}|[a-z0-9%])|[a-z0-9.\-]+[.][a-z]{2,13}/)(?:[^\s()<>\{\}\[\]]+|\([^\s()]*?\([^\s()]+\)[^\s()]*?\)|\([^\s]+?\))+(?:\([^\s()]*?\([^\s()]+\)[^\s()]*?\)|\([^\s]+?\)|[^\s`!()\[\]\{\};:'".,<>?«»“”‘’])"#;
const DOMAINS: &str = r"(?P<domain>[a-z0-9]+(?:[.\-][a-z0-9]+)*[.][a-z]{2,13}\b/?)";
const PHONES: &str = r"(?:(?:\+?[01][ *\-.)]*)?(?:\(?\d{3}[ *\-.)]*)?\d{3}[ *\-.)]*\d{4})";
const EMOTICONS: &str = r"(?:[<>]?[:;=8][\-o*']?[)\](\[dDpP/:\}\{@|\\]|[)\](\[dDpP/:\}\{@|\\][\-o*']?[:;=8][<>]?|</?3)";
const HTML_TAGS: &str = r"<[^>\s]+>";
const ARROWS: &str = r"[\-]+>|<[\-]+";
const HANDLES: &str = r"(?:@[\w_]+)";
const HASHTAGS: &str = r"(?:#+[\w_]+[\w'_\-]*[\w_]+)";
const EMAILS: &str = r"[\w.+\-]+@[\w\-]+\.(?:[\w\-]\.?)+[\w\-]";
const EMOJI: &str = r"(?:[\x{1F1E6}-\x{1F1FF}]{2}|[\x{1F300}-\x{1FAFF}\x{2600}-\x{27BF}][\x{FE0F}\x{1F3FB}-\x{1F3FF}]*(?:\x{200D}[\x{1F300}-\x{1FAFF}\x{2600}-\x{27BF}][\x{FE0F}\x{1F3FB}-\x{1F3FF}]*)*)";
const WORDS: &str = r"(?:[^\W\d_](?:[^\W\d_]|['\-_])+[^\W\d_])|(?:[+\-]?\d+[,/.:\-]\d+[+\-]?)|(?:[\w_]+)|(?:\.(?:\s*\.)+)|(?:\S)";

fn build(parts: &[&str]) -> Regex {
    RegexBuilder::new(&parts.join("|"))
        .case_insensitive(true)
        .build()
        .unwrap()
}

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    build(&[
        URLS, DOMAINS, PHONES, EMOTICONS, HTML_TAGS, ARROWS, HANDLES, HASHTAGS, EMAILS, EMOJI,
        WORDS,
    ])
});

// Same alternatives minus bare domains, for a domain that is really part of
// an e-mail address (`foo.na@example.com`).
static NO_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    build(&[
        URLS, PHONES, EMOTICONS, HTML_TAGS, ARROWS, HANDLES, HASHTAGS, EMAILS, EMOJI, WORDS,
    ])
});

static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").unwrap()
});

/// Tokenizer for tweets.
///
/// Runs of four or more identical non-alphanumeric characters (`!!!!!`) are
/// always shortened to three before matching.
#[derive(Debug, Clone, Default)]
pub struct TweetTokenizer {
    reduce_len: bool,
    strip_handles: bool,
}

impl TweetTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorten any character repeated three or more times to three
    /// (`waaaaay` becomes `waaay`).
    pub fn with_reduce_len(mut self, reduce_len: bool) -> Self {
        self.reduce_len = reduce_len;
        self
    }

    /// Drop `@handle` tokens from the output.
    pub fn with_strip_handles(mut self, strip_handles: bool) -> Self {
        self.strip_handles = strip_handles;
        self
    }
}

impl Tokenizer for TweetTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = decode_entities(text);
        let mut text = cap_runs(&text, |c| !c.is_ascii_alphanumeric());
        if self.reduce_len {
            text = cap_runs(&text, |_| true);
        }
        find_tokens(&text)
            .into_iter()
            .filter(|tok| !(self.strip_handles && is_handle(tok)))
            .map(String::from)
            .collect()
    }
}

fn find_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some(caps) = TOKEN_RE.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        let found = if caps.name("domain").is_some() && touches_at_sign(text, &whole) {
            NO_DOMAIN_RE.find_at(text, whole.start())
        } else {
            Some(whole)
        };
        let Some(m) = found else { break };
        tokens.push(m.as_str());
        pos = m.end();
    }
    tokens
}

/// A bare domain right before or after `@` belongs to an address.
fn touches_at_sign(text: &str, m: &Match) -> bool {
    text[..m.start()].ends_with('@') || text[m.end()..].starts_with('@')
}

fn is_handle(tok: &str) -> bool {
    tok.len() > 1 && tok.starts_with('@')
}

/// Replace HTML character references (named, decimal and hex) with the
/// characters they stand for. Unknown names are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            html_escape::decode_html_entities(&caps[0]).into_owned()
        })
        .into_owned()
}

/// Cap every run of one repeated character at three, for characters
/// selected by `applies`.
fn cap_runs(text: &str, applies: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut run = 0;
    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 3 || !applies(c) {
            out.push(c);
        }
    }
    out
}
