//! Song-title mode: guess the title from progressively revealed lyrics.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::title::{CHUNK_WORDS, HINT_SEPARATOR};
use crate::song::{Song, WordToken};
use crate::text::compare_equal;

/// Split a word sequence into chunks of `size` words, each joined by spaces.
pub fn chunk_words(words: &[WordToken], size: usize) -> Vec<String> {
    words
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().map(|t| t.display.as_str()).collect::<Vec<_>>().join(" "))
        .collect()
}

/// Lyric chunks shown in random order until the title is guessed.
#[derive(Debug, Clone)]
pub struct TitleQuiz {
    title: String,
    chunks: Vec<String>,
    revealed: usize,
}

impl TitleQuiz {
    /// Build a quiz with the default chunk size. `None` when the song has no words.
    pub fn new<R: Rng + ?Sized>(song: &Song, rng: &mut R) -> Option<Self> {
        Self::with_chunk_size(song, CHUNK_WORDS, rng)
    }

    /// Build a quiz whose hints are `chunk_size` words long.
    pub fn with_chunk_size<R: Rng + ?Sized>(
        song: &Song,
        chunk_size: usize,
        rng: &mut R,
    ) -> Option<Self> {
        let mut chunks = chunk_words(&song.tokens(), chunk_size);
        if chunks.is_empty() {
            return None;
        }
        chunks.shuffle(rng);

        Some(Self {
            title: song.title.clone(),
            chunks,
            revealed: 1,
        })
    }

    /// Revealed chunks, in reveal order.
    pub fn phrase(&self) -> String {
        self.chunks[..self.revealed].join(HINT_SEPARATOR)
    }

    /// Reveal one more chunk. Returns `false` once everything is shown.
    pub fn reveal_next(&mut self) -> bool {
        if self.revealed < self.chunks.len() {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    /// Number of chunks currently shown.
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    /// Number of chunks available.
    pub fn total_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// The title to find.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether a guess names the song, under the usual comparison rule.
    pub fn is_correct(&self, guess: &str) -> bool {
        compare_equal(guess, &self.title)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn amsterdam() -> Song {
        Song::from_text(
            "amsterdam",
            "Amsterdam",
            "jacques-brel",
            "Dans le port d'Amsterdam\nY a des marins qui chantent\n\
             Les rêves qui les hantent\nAu large d'Amsterdam",
        )
    }

    #[test]
    fn test_chunk_words() {
        let tokens = amsterdam().tokens();
        let chunks = chunk_words(&tokens, 6);
        assert_eq!(chunks.len(), tokens.len().div_ceil(6));
        assert_eq!(chunks[0].split(' ').count(), 6);
    }

    #[test]
    fn test_reveal_progression() {
        let mut quiz = TitleQuiz::new(&amsterdam(), &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(quiz.revealed(), 1);
        assert!(!quiz.phrase().contains(HINT_SEPARATOR));

        while quiz.reveal_next() {}
        assert_eq!(quiz.revealed(), quiz.total_chunks());
        assert_eq!(quiz.phrase().matches(HINT_SEPARATOR).count(), quiz.total_chunks() - 1);
    }

    #[test]
    fn test_title_guess_is_tolerant() {
        let quiz = TitleQuiz::new(&amsterdam(), &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(quiz.is_correct("amsterdam"));
        assert!(quiz.is_correct(" AMSTERDAM "));
        assert!(!quiz.is_correct("Bruxelles"));
        assert_eq!(quiz.title(), "Amsterdam");
    }

    #[test]
    fn test_empty_song_has_no_quiz() {
        let song = Song::new("empty", "Silence", "nobody", Vec::<String>::new());
        assert!(TitleQuiz::new(&song, &mut StdRng::seed_from_u64(0)).is_none());
    }
}
