//! Dump the songs of every artist catalog with their playability per difficulty.
//!
//! Usage: cargo run --bin dump_catalog [-- --dir ~/lyrics/artists]

use std::path::PathBuf;

use anyhow::{Context, Result};
use lyricle::catalog::Catalog;
use lyricle::config::{Config, Difficulty};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("Failed to load config")?;
    let dir = std::env::args()
        .position(|a| a == "--dir")
        .and_then(|i| std::env::args().nth(i + 1))
        .map(|s| PathBuf::from(shellexpand::tilde(&s).to_string()))
        .or(config.data_dir)
        .context("No data directory: pass --dir or set LYRICLE_DATA_DIR")?;

    let artists = Catalog::discover_artists(&dir);
    println!("=== Artists in {} ({}) ===\n", dir.display(), artists.len());

    for artist in &artists {
        let catalog = match Catalog::load_artist(&dir, artist) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Skipping {artist}: {e}");
                continue;
            }
        };

        println!("--- {artist} | {} songs ---", catalog.len());
        for song in catalog.songs() {
            let words = song.word_count();
            let playable: Vec<&str> = Difficulty::all()
                .iter()
                .filter(|d| words >= d.puzzle_config().smallest_window())
                .map(|d| d.name())
                .collect();
            println!(
                "  {:<32} {:>5} words  [{}]",
                song.title,
                words,
                playable.join(", ")
            );
        }
        println!();
    }

    Ok(())
}
