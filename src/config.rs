//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Only the binaries read the environment; the puzzle engine takes a
//! [`PuzzleConfig`] explicitly.

use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::artist_path;
use crate::constants::catalog::DEFAULT_ARTIST;
use crate::constants::difficulty::{EASY_VISIBLE_WORDS, HARD_VISIBLE_WORDS, MEDIUM_VISIBLE_WORDS};
use crate::constants::puzzle::DEFAULT_MAX_ATTEMPTS;
use crate::error::{Error, Result};
use crate::puzzle::{PuzzleConfig, Variant};
use crate::types::ArtistId;

/// Difficulty preset of the word-guessing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Eight visible words.
    Easy,
    /// Five visible words.
    #[default]
    Medium,
    /// Three visible words.
    Hard,
}

impl Difficulty {
    /// Returns all presets, easiest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    /// Returns the human-readable name of this preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Minimum number of words shown next to the blank.
    #[must_use]
    pub const fn visible_words(self) -> usize {
        match self {
            Self::Easy => EASY_VISIBLE_WORDS,
            Self::Medium => MEDIUM_VISIBLE_WORDS,
            Self::Hard => HARD_VISIBLE_WORDS,
        }
    }

    /// Puzzle configuration for this preset.
    pub fn puzzle_config(self) -> PuzzleConfig {
        PuzzleConfig::for_visible_words(self.visible_words())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(Error::config(
                format!("unknown difficulty '{other}'"),
                "Set LYRICLE_DIFFICULTY to easy, medium or hard",
            )),
        }
    }
}

/// Configuration for the command-line tools.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory holding one `<artist>.json` catalog per artist
    pub data_dir: Option<PathBuf>,
    /// Artist whose songs are played
    pub artist: ArtistId,
    /// Word-guessing difficulty
    pub difficulty: Difficulty,
    /// Windows sampled per song before moving on
    pub max_attempts: u32,
    /// Variants drawn from
    pub variants: Vec<Variant>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: None,
            artist: ArtistId::new(DEFAULT_ARTIST),
            difficulty: Difficulty::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            variants: Variant::all().to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;
        if config.data_dir.is_none() {
            config.data_dir = default_data_dir();
        }
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("LYRICLE_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(shellexpand::tilde(&path).to_string()));
        }

        if let Some(artist) = lookup("LYRICLE_ARTIST").filter(|a| !a.trim().is_empty()) {
            config.artist = ArtistId::new(artist.trim());
        }

        if let Some(difficulty) = lookup("LYRICLE_DIFFICULTY") {
            config.difficulty = difficulty.parse()?;
        }

        if let Some(attempts) = lookup("LYRICLE_MAX_ATTEMPTS") {
            config.max_attempts = attempts
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    Error::config(
                        format!("LYRICLE_MAX_ATTEMPTS={attempts} is not a positive integer"),
                        "Use a whole number such as 10",
                    )
                })?;
        }

        if let Some(variants) = lookup("LYRICLE_VARIANTS") {
            config.variants = variants
                .split(',')
                .filter(|v| !v.trim().is_empty())
                .map(str::parse)
                .collect::<Result<Vec<Variant>>>()?;
        }

        Ok(config)
    }

    /// Puzzle configuration implied by the difficulty and overrides.
    pub fn puzzle_config(&self) -> PuzzleConfig {
        self.difficulty
            .puzzle_config()
            .with_variants(self.variants.clone())
            .with_max_attempts(self.max_attempts)
    }

    /// Path of the configured artist's catalog, if a data directory is known.
    pub fn artist_path(&self) -> Option<PathBuf> {
        self.data_dir.as_deref().map(|dir| artist_path(dir, &self.artist))
    }
}

/// Default catalog directory: `<data dir>/lyricle/artists`, when it exists.
fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("lyricle").join("artists"))
        .filter(|p| p.is_dir())
}
