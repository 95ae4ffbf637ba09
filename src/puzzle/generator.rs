//! Random window sampling with uniqueness validation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Puzzle, PuzzleConfig, PuzzleError, Variant};
use crate::constants::puzzle::BLANK;
use crate::song::{Song, WordToken};

/// Generate a puzzle from `song`, sampling at most `config.max_attempts` windows.
///
/// Each attempt draws a window length, a variant, a start position and the
/// hidden word. The first window whose full word sequence occurs exactly once
/// in the song is returned. Songs that are too short fail before any attempt
/// is spent.
pub fn generate<R: Rng + ?Sized>(
    song: &Song,
    config: &PuzzleConfig,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    config.validate()?;

    let tokens = song.tokens();
    if tokens.is_empty() {
        return Err(PuzzleError::EmptySong);
    }

    let required = config.smallest_window();
    if tokens.len() < required {
        return Err(PuzzleError::Infeasible { words: tokens.len(), min_words: required });
    }

    let keys: Vec<&str> = tokens.iter().map(|t| t.key.as_str()).collect();
    let longest = config.max_words.min(tokens.len());

    let mut sampled = 0;
    for attempt in 1..=config.max_attempts {
        sampled = attempt;
        let Some((len, variant)) = draw_shape(config, required, longest, rng) else {
            continue;
        };
        let start = rng.gen_range(0..=tokens.len() - len);
        let Some(offset) = variant.blank_offset(len, rng) else {
            continue;
        };

        if !is_unique(&keys, &keys[start..start + len]) {
            tracing::debug!(
                song = %song.id,
                attempt,
                start,
                len,
                "Rejected ambiguous window"
            );
            continue;
        }

        tracing::trace!(song = %song.id, attempt, %variant, len, "Accepted window");
        let window = &tokens[start..start + len];
        return Ok(Puzzle {
            phrase: render_phrase(window, offset),
            answer: window[offset].clone(),
            variant,
            song_id: song.id.clone(),
            song_title: song.title.clone(),
            start,
            window_len: len,
            answer_index: start + offset,
            attempt,
        });
    }

    Err(PuzzleError::Unavailable { attempts: sampled })
}

/// Draw a window length, then a variant that fits it.
///
/// When the drawn length fits no pooled variant (only `missing` is pooled
/// and the window is under three words) the length is re-drawn from the
/// range every pooled variant fits.
fn draw_shape<R: Rng + ?Sized>(
    config: &PuzzleConfig,
    required: usize,
    longest: usize,
    rng: &mut R,
) -> Option<(usize, Variant)> {
    let mut len = rng.gen_range(config.min_words..=longest);
    if !config.variants.iter().any(|v| v.fits(len)) {
        len = rng.gen_range(required..=longest);
    }

    let fitting: Vec<Variant> = config.variants.iter().copied().filter(|v| v.fits(len)).collect();
    fitting.choose(rng).map(|&variant| (len, variant))
}

/// Join the window on one line with the hidden word replaced by the blank.
fn render_phrase(window: &[WordToken], hidden: usize) -> String {
    window
        .iter()
        .enumerate()
        .map(|(i, token)| if i == hidden { BLANK } else { token.display.as_str() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of offsets at which `needle` matches `haystack` position by position.
pub fn occurrences(haystack: &[&str], needle: &[&str]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// Whether `needle` occurs exactly once in `haystack`.
///
/// Stops scanning at the second match.
pub fn is_unique(haystack: &[&str], needle: &[&str]) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).take(2).count() == 1
}
