//! `Lyricle` - sample lyric puzzles from an artist catalog.
//!
//! Usage: cargo run -- [--catalog PATH] [--count 5] [--seed 42] [--reveal]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use lyricle::catalog::Catalog;
use lyricle::config::Config;
use lyricle::constants::catalog::DEFAULT_MAX_SONGS;
use lyricle::constants::scoring::MAX_GUESSES;
use lyricle::scoring::score;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Value following `flag` on the command line.
fn arg_value(flag: &str) -> Option<String> {
    std::env::args()
        .position(|a| a == flag)
        .and_then(|i| std::env::args().nth(i + 1))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::load().context("Failed to load config")?;
    let count: usize = arg_value("--count").and_then(|s| s.parse().ok()).unwrap_or(5);
    let reveal = std::env::args().any(|a| a == "--reveal");

    let catalog = match arg_value("--catalog").map(PathBuf::from).or_else(|| config.artist_path()) {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => bail!("No catalog found: pass --catalog PATH or set LYRICLE_DATA_DIR"),
    };

    let mut rng = arg_value("--seed")
        .and_then(|s| s.parse::<u64>().ok())
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let puzzle_config = config.puzzle_config();
    println!(
        "=== {} v{} | {} | {} ({} visible words) ===\n",
        config.app_name(),
        config.app_version(),
        catalog.artist_id(),
        config.difficulty.name(),
        config.difficulty.visible_words(),
    );

    for round in 1..=count {
        let (song, puzzle) = catalog
            .generate_puzzle(&puzzle_config, &mut rng, DEFAULT_MAX_SONGS)
            .with_context(|| format!("Round {round}"))?;

        println!("{round:>2}. [{:<8}] {}", puzzle.variant, puzzle.phrase);
        if reveal {
            println!(
                "    answer: {} ({} letters) | song: {} | found on attempt {}",
                puzzle.answer.display,
                puzzle.letter_count(),
                song.title,
                puzzle.attempt,
            );
            if let Some(context) = puzzle.answer_context(song) {
                for line in context.lines() {
                    println!("    | {line}");
                }
            }
        }
    }

    if reveal {
        println!("\nScoring (attempt x seconds):");
        for attempt in 1..=MAX_GUESSES {
            let row: Vec<String> = [5.0, 30.0, 60.0, 121.0]
                .iter()
                .map(|secs| format!("{:>5}", score(attempt, *secs)))
                .collect();
            println!("  {attempt}: {}", row.join(""));
        }
    }

    Ok(())
}
