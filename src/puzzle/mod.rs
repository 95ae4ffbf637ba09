//! Fill-in-the-blank puzzles drawn from song lyrics.
//!
//! A puzzle is a contiguous window of words from one song with a single word
//! hidden. A window is only accepted when its full word sequence occurs
//! exactly once in the song, so the hidden word has exactly one answer.

mod generator;
pub mod title;
mod variant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::puzzle::{
    ANSWER_CONTEXT_WORDS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS,
    VISIBLE_MODE_MAX_WORDS,
};
use crate::song::{Song, WordToken};
use crate::types::SongId;

pub use generator::{generate, is_unique, occurrences};
pub use variant::Variant;

/// Why no puzzle could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Every sampled window was ambiguous. Retry, usually with another song.
    #[error("No unique phrase found after {attempts} attempts")]
    Unavailable {
        /// Windows sampled before giving up.
        attempts: u32,
    },

    /// The song is too short for the configured window range.
    #[error("Song has {words} words but puzzles need at least {min_words}")]
    Infeasible {
        /// Words in the song.
        words: usize,
        /// Words needed by the smallest usable window.
        min_words: usize,
    },

    /// The song has no words at all.
    #[error("Song has no lyrics")]
    EmptySong,

    /// The configuration can never produce a puzzle.
    #[error("Invalid puzzle configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },
}

impl PuzzleError {
    /// Whether drawing again may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Whether the song itself can never yield a puzzle under this configuration.
    pub const fn rejects_song(&self) -> bool {
        matches!(self, Self::Infeasible { .. } | Self::EmptySong)
    }

    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

/// Window range, variant pool and retry budget for puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Shortest window, hidden word included.
    pub min_words: usize,
    /// Longest window, hidden word included.
    pub max_words: usize,
    /// Variants drawn from, uniformly.
    pub variants: Vec<Variant>,
    /// Windows sampled before reporting [`PuzzleError::Unavailable`].
    pub max_attempts: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS)
    }
}

impl PuzzleConfig {
    /// Window range with every variant and the default retry budget.
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
            variants: Variant::all().to_vec(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Word-guessing mode: at least `visible` words shown next to the blank.
    pub fn for_visible_words(visible: usize) -> Self {
        let min_words = visible + 1;
        Self::new(min_words, VISIBLE_MODE_MAX_WORDS.max(min_words))
    }

    /// Restrict the variant pool.
    #[must_use]
    pub fn with_variants(mut self, variants: impl Into<Vec<Variant>>) -> Self {
        self.variants = variants.into();
        self
    }

    /// Change the retry budget.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Reject configurations that could never produce a puzzle.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.min_words == 0 {
            return Err(PuzzleError::invalid("min_words must be at least 1"));
        }
        if self.min_words > self.max_words {
            return Err(PuzzleError::invalid(format!(
                "min_words ({}) is greater than max_words ({})",
                self.min_words, self.max_words
            )));
        }
        if self.variants.is_empty() {
            return Err(PuzzleError::invalid("variant pool is empty"));
        }
        if self.max_attempts == 0 {
            return Err(PuzzleError::invalid("max_attempts must be at least 1"));
        }
        if self.smallest_window() > self.max_words {
            return Err(PuzzleError::invalid(format!(
                "no variant in the pool fits a window of at most {} words",
                self.max_words
            )));
        }
        Ok(())
    }

    /// Shortest window any pooled variant can be applied to.
    pub fn smallest_window(&self) -> usize {
        let variant_min = self.variants.iter().map(|v| v.min_window()).min().unwrap_or(usize::MAX);
        self.min_words.max(variant_min)
    }
}

/// A validated fill-in-the-blank puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    /// The window with the hidden word replaced by a blank, on one line.
    pub phrase: String,
    /// The hidden word.
    pub answer: WordToken,
    /// Where the blank falls.
    pub variant: Variant,
    /// Song the phrase was taken from.
    pub song_id: SongId,
    /// Title of that song.
    pub song_title: String,
    /// Index of the first window word in the song's word sequence.
    pub start: usize,
    /// Words in the window, hidden word included.
    pub window_len: usize,
    /// Index of the hidden word in the song's word sequence.
    pub answer_index: usize,
    /// Sampling attempt (1-based) on which the window was accepted.
    pub attempt: u32,
}

impl Puzzle {
    /// Whether a guess names the hidden word.
    pub fn is_correct(&self, guess: &str) -> bool {
        self.answer.matches(guess)
    }

    /// Number of words shown next to the blank.
    pub const fn visible_words(&self) -> usize {
        self.window_len - 1
    }

    /// Hint: number of characters in the answer.
    pub fn letter_count(&self) -> usize {
        self.answer.display.chars().count()
    }

    /// Hint: the answer's first letter, upper-cased.
    pub fn first_letter(&self) -> String {
        self.answer.display.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    /// Lyric lines around the answer, for the reveal after a round.
    pub fn answer_context(&self, song: &Song) -> Option<String> {
        if song.id != self.song_id {
            return None;
        }
        song.context_around(self.answer_index, ANSWER_CONTEXT_WORDS)
    }
}
