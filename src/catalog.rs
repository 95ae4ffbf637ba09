//! Song catalog loaded from per-artist JSON files.
//!
//! Each artist lives in `<data dir>/<artist-id>.json`:
//!
//! ```json
//! { "metadata": {}, "songs": [
//!     { "id": "amsterdam", "title": "Amsterdam", "album": null, "year": 1964,
//!       "lyrics": [{ "lines": ["Dans le port d'Amsterdam"] }],
//!       "full_text": "Dans le port d'Amsterdam\n..." } ] }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::constants::catalog::{MIN_LYRICS_CHARS, MIN_TITLE_SCORE};
use crate::error::{Error, Result};
use crate::puzzle::{generate, Puzzle, PuzzleConfig};
use crate::song::Song;
use crate::text::comparison_key;
use crate::types::{ArtistId, SongId};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    songs: Vec<SongRecord>,
}

#[derive(Debug, Deserialize)]
struct SongRecord {
    id: String,
    title: String,
    #[serde(default)]
    lyrics: Vec<VerseRecord>,
    #[serde(default)]
    full_text: String,
}

#[derive(Debug, Deserialize)]
struct VerseRecord {
    #[serde(default)]
    lines: Vec<String>,
}

impl SongRecord {
    /// Lines from `full_text`, falling back to the verse lines.
    fn into_song(self, artist_id: &ArtistId) -> Option<Song> {
        let text = if self.full_text.trim().is_empty() {
            self.lyrics
                .iter()
                .map(|verse| verse.lines.join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n")
        } else {
            self.full_text
        };

        if text.chars().count() <= MIN_LYRICS_CHARS {
            tracing::debug!("Skipping '{}': lyrics too short", self.title);
            return None;
        }
        Some(Song::from_text(self.id, self.title, artist_id.clone(), &text))
    }
}

/// The songs of one artist.
#[derive(Debug, Clone)]
pub struct Catalog {
    artist_id: ArtistId,
    songs: Vec<Song>,
    by_id: HashMap<SongId, usize>,
}

impl Catalog {
    /// Build a catalog from songs already in memory.
    pub fn new(artist_id: impl Into<ArtistId>, songs: Vec<Song>) -> Self {
        let by_id = songs.iter().enumerate().map(|(idx, song)| (song.id.clone(), idx)).collect();
        Self { artist_id: artist_id.into(), songs, by_id }
    }

    /// Parse a catalog document. Songs with too little text are skipped.
    pub fn from_json(json: &str, artist_id: impl Into<ArtistId>) -> Result<Self> {
        let artist_id = artist_id.into();
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| Error::parse(e.to_string(), None::<PathBuf>))?;
        let songs = file
            .songs
            .into_iter()
            .filter_map(|record| record.into_song(&artist_id))
            .collect();
        Ok(Self::new(artist_id, songs))
    }

    /// Load a catalog file; the artist id is the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let artist_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(ArtistId::new)
            .ok_or_else(|| {
                Error::Catalog(format!("Cannot derive artist from {}", path.display()))
            })?;

        let json = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let catalog = Self::from_json(&json, artist_id).map_err(|e| match e {
            Error::Parse { message, .. } => Error::parse(message, path.to_path_buf()),
            other => other,
        })?;

        tracing::info!("Loaded {} songs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load `<dir>/<artist>.json`.
    pub fn load_artist(dir: &Path, artist: &ArtistId) -> Result<Self> {
        let path = artist_path(dir, artist);
        if !path.is_file() {
            return Err(Error::Catalog(format!(
                "No catalog for artist '{artist}' at {}",
                path.display()
            )));
        }
        Self::load(&path)
    }

    /// Artist ids with a catalog file in `dir`, sorted.
    ///
    /// A missing directory or unreadable entry is logged and skipped.
    pub fn discover_artists(dir: &Path) -> Vec<ArtistId> {
        let mut artists: Vec<ArtistId> = WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(e) => {
                    tracing::warn!("Failed to read catalog directory {}: {e}", dir.display());
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|e| e.path().file_stem()?.to_str().map(ArtistId::new))
            .collect();
        artists.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        artists
    }

    /// Artist of this catalog.
    pub const fn artist_id(&self) -> &ArtistId {
        &self.artist_id
    }

    /// All songs, in file order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the catalog has no songs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Look up a song by id.
    pub fn song(&self, id: &SongId) -> Option<&Song> {
        self.by_id.get(id).and_then(|&idx| self.songs.get(idx))
    }

    /// Pick a song uniformly.
    pub fn random_song<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Song> {
        self.songs.choose(rng)
    }

    /// Find a song by title.
    ///
    /// An exact match under the comparison rule wins outright, then the best
    /// fuzzy match above a minimum score.
    pub fn find_by_title(&self, query: &str) -> Option<&Song> {
        let query_key = comparison_key(query);
        if query_key.is_empty() {
            return None;
        }

        if let Some(song) = self.songs.iter().find(|s| comparison_key(&s.title) == query_key) {
            return Some(song);
        }

        let matcher = SkimMatcherV2::default();
        self.songs
            .iter()
            .filter_map(|song| {
                let score = matcher.fuzzy_match(&comparison_key(&song.title), &query_key)?;
                (score >= MIN_TITLE_SCORE).then_some((score, song))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, song)| song)
    }

    /// Generate a puzzle from random songs, trying at most `max_songs` of them.
    ///
    /// Songs that are too short or keep producing ambiguous windows are
    /// skipped; configuration errors are returned immediately.
    pub fn generate_puzzle<R: Rng + ?Sized>(
        &self,
        config: &PuzzleConfig,
        rng: &mut R,
        max_songs: usize,
    ) -> Result<(&Song, Puzzle)> {
        config.validate()?;
        if self.is_empty() {
            return Err(Error::Catalog(format!("Catalog for '{}' has no songs", self.artist_id)));
        }

        for _ in 0..max_songs {
            let Some(song) = self.random_song(rng) else {
                break;
            };
            match generate(song, config, rng) {
                Ok(puzzle) => return Ok((song, puzzle)),
                Err(e) if e.is_retryable() || e.rejects_song() => {
                    tracing::debug!(song = %song.id, "Trying another song: {e}");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(Error::Catalog(format!(
            "No playable puzzle found in {max_songs} songs by '{}'",
            self.artist_id
        )))
    }
}

/// Path of an artist's catalog file inside `dir`.
pub fn artist_path(dir: &Path, artist: &ArtistId) -> PathBuf {
    dir.join(format!("{artist}.json"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CATALOG: &str = r#"{
        "metadata": {"artist": "Jacques Brel"},
        "songs": [
            {
                "id": "ne-me-quitte-pas",
                "title": "Ne me quitte pas",
                "full_text":
                    "Ne me quitte pas\nIl faut oublier\nTout peut s'oublier\nQui s'enfuit déjà"
            },
            {
                "id": "la-valse",
                "title": "La valse à mille temps",
                "lyrics": [
                    {"lines": ["Au premier temps de la valse", "Toute seule tu souris déjà"]},
                    {"lines": ["Au premier temps de la valse", "Je suis seul mais je t'aperçois"]}
                ]
            },
            {"id": "tiny", "title": "Tiny", "full_text": "trop court"}
        ]
    }"#;

    #[test]
    fn test_from_json_skips_short_songs() {
        let catalog = Catalog::from_json(CATALOG, "jacques-brel").unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.song(&SongId::new("tiny")).is_none());

        let valse = catalog.song(&SongId::new("la-valse")).unwrap();
        assert_eq!(valse.lines.len(), 5);
        assert_eq!(valse.lines[2], "");
        assert_eq!(valse.artist_id.as_str(), "jacques-brel");
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Catalog::from_json("{ not json", "x").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_find_by_title() {
        let catalog = Catalog::from_json(CATALOG, "jacques-brel").unwrap();
        let exact = catalog.find_by_title("ne me quitte pas").unwrap();
        assert_eq!(exact.id.as_str(), "ne-me-quitte-pas");
        let unaccented = catalog.find_by_title("La Valse a mille temps").unwrap();
        assert_eq!(unaccented.id.as_str(), "la-valse");
        assert!(catalog.find_by_title("").is_none());
        assert!(catalog.find_by_title("zzzz qqqq").is_none());
    }

    #[test]
    fn test_generate_puzzle_from_catalog() {
        let catalog = Catalog::from_json(CATALOG, "jacques-brel").unwrap();
        let config = PuzzleConfig::new(3, 6);
        let mut rng = StdRng::seed_from_u64(8);

        let (song, puzzle) = catalog.generate_puzzle(&config, &mut rng, 10).unwrap();
        assert_eq!(song.id, puzzle.song_id);
        assert!(puzzle.answer_context(song).is_some());
    }

    #[test]
    fn test_generate_puzzle_gives_up() {
        let catalog = Catalog::from_json(CATALOG, "jacques-brel").unwrap();
        let config = PuzzleConfig::new(200, 300);
        let err = catalog.generate_puzzle(&config, &mut StdRng::seed_from_u64(1), 5).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));

        let bad = PuzzleConfig::new(5, 1);
        let err = catalog.generate_puzzle(&bad, &mut StdRng::seed_from_u64(1), 5).unwrap_err();
        assert!(matches!(err, Error::Puzzle(_)));
    }

    #[test]
    fn test_load_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jacques-brel.json"), CATALOG).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let artists = Catalog::discover_artists(dir.path());
        assert_eq!(artists, vec![ArtistId::new("jacques-brel")]);

        let catalog = Catalog::load_artist(dir.path(), &artists[0]).unwrap();
        assert_eq!(catalog.artist_id().as_str(), "jacques-brel");
        assert_eq!(catalog.len(), 2);

        let missing = Catalog::load_artist(dir.path(), &ArtistId::new("benabar"));
        assert!(matches!(missing, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benabar.json");

        match Catalog::load(&path) {
            Err(Error::Io { path: Some(p), .. }) => assert_eq!(p, path),
            other => panic!("expected an IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("no-such-dir");

        assert!(Catalog::discover_artists(&gone).is_empty());
        assert!(Catalog::load_artist(&gone, &ArtistId::new("jacques-brel")).is_err());
    }
}
