//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

use crate::puzzle::PuzzleError;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Catalog file parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Song catalog error (missing artist, no playable songs)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Puzzle generation failed
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Whether asking again (another song, another draw) may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Puzzle(e) if e.is_retryable())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_carries_hint() {
        let err = Error::config("LYRICLE_DIFFICULTY=extreme", "Use easy, medium or hard");
        let text = err.to_string();
        assert!(text.contains("LYRICLE_DIFFICULTY"));
        assert!(text.ends_with("Use easy, medium or hard"));
    }

    #[test]
    fn only_exhausted_puzzles_are_retryable() {
        let exhausted = Error::from(PuzzleError::Unavailable { attempts: 10 });
        assert!(exhausted.is_retryable());

        let short = Error::from(PuzzleError::Infeasible { words: 2, min_words: 8 });
        assert!(!short.is_retryable());

        assert!(!Error::Catalog("no songs".into()).is_retryable());
    }
}
