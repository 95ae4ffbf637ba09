//! Game constants.
//!
//! Centralizes magic numbers and default values for better maintainability.

/// Puzzle generation constants.
pub mod puzzle {
    /// Marker substituted for the hidden word in a displayed phrase.
    pub const BLANK: &str = "___";

    /// Default minimum window length in words.
    pub const DEFAULT_MIN_WORDS: usize = 8;

    /// Default maximum window length in words.
    pub const DEFAULT_MAX_WORDS: usize = 15;

    /// Default number of windows sampled before giving up on a song.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

    /// Upper window length used by the word-guessing mode.
    pub const VISIBLE_MODE_MAX_WORDS: usize = 12;

    /// Smallest window that can hide an interior word.
    pub const MISSING_MIN_WORDS: usize = 3;

    /// Total words of context shown around an answer when it is revealed.
    pub const ANSWER_CONTEXT_WORDS: usize = 20;
}

/// Difficulty presets, expressed as the minimum number of visible words.
pub mod difficulty {
    /// Few visible words.
    pub const HARD_VISIBLE_WORDS: usize = 3;

    /// Default preset.
    pub const MEDIUM_VISIBLE_WORDS: usize = 5;

    /// Many visible words.
    pub const EASY_VISIBLE_WORDS: usize = 8;
}

/// Scoring constants.
pub mod scoring {
    /// Points for a first-attempt answer within the grace period.
    pub const BASE_POINTS: u32 = 1000;

    /// Multiplier lost per additional attempt.
    pub const ATTEMPT_PENALTY: f64 = 0.15;

    /// Lowest attempt multiplier, reached from the sixth attempt on.
    pub const MIN_ATTEMPT_MULTIPLIER: f64 = 0.25;

    /// Attempts a round allows before it counts as lost.
    pub const MAX_GUESSES: u32 = 5;

    /// Answers faster than this keep the full time multiplier.
    pub const GRACE_SECONDS: f64 = 10.0;

    /// Answers slower than this get the floor time multiplier.
    pub const SLOW_SECONDS: f64 = 120.0;

    /// Floor of the time multiplier.
    pub const MIN_TIME_MULTIPLIER: f64 = 0.30;
}

/// Catalog constants.
pub mod catalog {
    /// Songs whose lyrics are this short or shorter are skipped on load.
    pub const MIN_LYRICS_CHARS: usize = 50;

    /// Minimum fuzzy score for a title lookup to count as a match.
    pub const MIN_TITLE_SCORE: i64 = 80;

    /// Songs tried before a catalog-level puzzle request gives up.
    pub const DEFAULT_MAX_SONGS: usize = 20;

    /// Artist loaded when none is configured.
    pub const DEFAULT_ARTIST: &str = "jacques-brel";
}

/// Title quiz constants.
pub mod title {
    /// Words per lyrics chunk revealed as a hint.
    pub const CHUNK_WORDS: usize = 6;

    /// Separator between revealed chunks.
    pub const HINT_SEPARATOR: &str = " / ";
}
