//! Song records and their flattened word sequence.

use serde::{Deserialize, Serialize};

use crate::text::{comparison_key, compare_equal, tokenize_line};
use crate::types::{ArtistId, SongId};

/// A song as handed over by the catalog. Read-only to puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Catalog identifier.
    pub id: SongId,
    /// Display title.
    pub title: String,
    /// Artist the song belongs to.
    pub artist_id: ArtistId,
    /// Lyric lines in order. Blank lines separate verses.
    pub lines: Vec<String>,
}

impl Song {
    /// Create a song from its lyric lines.
    pub fn new<L, S>(
        id: impl Into<SongId>,
        title: impl Into<String>,
        artist_id: impl Into<ArtistId>,
        lines: L,
    ) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            artist_id: artist_id.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a song from a block of text, one lyric line per `\n`.
    pub fn from_text(
        id: impl Into<SongId>,
        title: impl Into<String>,
        artist_id: impl Into<ArtistId>,
        text: &str,
    ) -> Self {
        Self::new(id, title, artist_id, text.split('\n'))
    }

    /// Flatten the lyrics into one ordered word sequence.
    ///
    /// Line breaks never produce tokens; word order is preserved across lines.
    pub fn tokens(&self) -> Vec<WordToken> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(line, text)| {
                tokenize_line(text).into_iter().map(move |word| WordToken::new(word, line))
            })
            .collect()
    }

    /// Number of words in the flattened lyrics.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|line| tokenize_line(line).len()).sum()
    }

    /// The lyrics as one block of text.
    pub fn full_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whole lyric lines surrounding the word at `word_index`.
    ///
    /// Roughly `context_words` words are taken around the word, half before
    /// and half after, then widened to full lines. Line breaks are kept.
    pub fn context_around(&self, word_index: usize, context_words: usize) -> Option<String> {
        let tokens = self.tokens();
        if word_index >= tokens.len() {
            return None;
        }

        let before = context_words / 2;
        let after = context_words - before;
        let first = word_index.saturating_sub(before);
        let last = (word_index + after).min(tokens.len() - 1);

        let first_line = tokens[first].line;
        let last_line = tokens[last].line;
        let lines: Vec<&str> = self.lines[first_line..=last_line]
            .iter()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        Some(lines.join("\n"))
    }
}

/// A word of the lyrics with its display and comparison projections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordToken {
    /// The word as shown to the player (apostrophes unified).
    pub display: String,
    /// Lowercased, accent-free comparison key.
    pub key: String,
    /// Index of the lyric line the word came from.
    pub line: usize,
}

impl WordToken {
    /// Create a token, deriving its comparison key.
    pub fn new(display: impl Into<String>, line: usize) -> Self {
        let display = display.into();
        let key = comparison_key(&display);
        Self { display, key, line }
    }

    /// Whether a player's guess names this word.
    pub fn matches(&self, guess: &str) -> bool {
        compare_equal(guess, &self.display)
    }
}
