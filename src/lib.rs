//! `Lyricle` - fill-in-the-blank lyrics puzzles.
//!
//! This crate turns song lyrics into guessing puzzles: a short phrase with
//! one word hidden, guaranteed to have a single answer within the song, and
//! scores answers by attempts and elapsed time.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod puzzle;
pub mod scoring;
pub mod song;
pub mod text;
pub mod types;
