use std::fmt;
use std::io;

/// Everything that can abort a run. None of these are recovered from.
#[derive(Debug)]
pub enum TermError {
    /// Opening or reading the input, or a stopword file, failed.
    Io(io::Error),
    /// A line was not a JSON object with a string `text` field.
    Json {
        line: usize,
        source: serde_json::Error,
    },
    /// Rendering or writing the chart failed.
    Plot(String),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::Io(e) => write!(f, "I/O error: {e}"),
            TermError::Json { line, source } => write!(f, "Invalid tweet on line {line}: {source}"),
            TermError::Plot(msg) => write!(f, "Plotting failed: {msg}"),
        }
    }
}

impl std::error::Error for TermError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TermError::Io(e) => Some(e),
            TermError::Json { source, .. } => Some(source),
            TermError::Plot(_) => None,
        }
    }
}

impl From<io::Error> for TermError {
    fn from(e: io::Error) -> Self {
        TermError::Io(e)
    }
}
