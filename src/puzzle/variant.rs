//! Where the blank falls inside a phrase window.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::puzzle::MISSING_MIN_WORDS;
use crate::error::Error;

/// Which word of the window is hidden from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Hide the last word: context followed by the blank.
    Next,
    /// Hide the first word: the blank followed by context.
    Previous,
    /// Hide an interior word, with context on both sides.
    Missing,
}

impl Variant {
    /// Returns all variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Next, Self::Previous, Self::Missing]
    }

    /// Returns the wire name of this variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Missing => "missing",
        }
    }

    /// Smallest window this variant can be applied to.
    #[must_use]
    pub const fn min_window(self) -> usize {
        match self {
            Self::Next | Self::Previous => 1,
            Self::Missing => MISSING_MIN_WORDS,
        }
    }

    /// Whether a window of `len` words can hide a word this way.
    #[must_use]
    pub const fn fits(self, len: usize) -> bool {
        len >= self.min_window()
    }

    /// Offset of the hidden word inside a window of `len` words.
    ///
    /// Interior offsets are drawn uniformly, excluding both window
    /// boundaries. `None` when the window is too short for this variant.
    pub fn blank_offset<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> Option<usize> {
        if !self.fits(len) {
            return None;
        }
        Some(match self {
            Self::Next => len - 1,
            Self::Previous => 0,
            Self::Missing => rng.gen_range(1..len - 1),
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "previous" | "prev" => Ok(Self::Previous),
            "missing" => Ok(Self::Missing),
            other => Err(Error::config(
                format!("unknown puzzle variant '{other}'"),
                "Use next, previous or missing",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_edge_variants_are_fixed() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Variant::Next.blank_offset(6, &mut rng), Some(5));
        assert_eq!(Variant::Previous.blank_offset(6, &mut rng), Some(0));
        assert_eq!(Variant::Next.blank_offset(1, &mut rng), Some(0));
    }

    #[test]
    fn test_too_short_window_has_no_blank() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Variant::Next.blank_offset(0, &mut rng), None);
        assert_eq!(Variant::Previous.blank_offset(0, &mut rng), None);
        assert_eq!(Variant::Missing.blank_offset(2, &mut rng), None);
    }

    #[test]
    fn test_missing_never_hides_a_boundary() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 3..12 {
            for _ in 0..50 {
                let offset = Variant::Missing.blank_offset(len, &mut rng).unwrap();
                assert!(offset > 0 && offset < len - 1, "offset {offset} in window of {len}");
            }
        }
    }

    #[test]
    fn test_missing_needs_three_words() {
        assert!(!Variant::Missing.fits(2));
        assert!(Variant::Missing.fits(3));
        assert!(Variant::Next.fits(1));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for variant in Variant::all() {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), *variant);
        }
        assert!("sideways".parse::<Variant>().is_err());
    }
}
