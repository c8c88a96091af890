#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use game::*;
pub use grid::*;
pub use history::*;
pub use placer::*;
pub use source::*;
pub use types::*;

mod cell;
mod error;
mod game;
mod grid;
mod history;
mod placer;
mod source;
mod types;

/// Normalized word list for one puzzle together with the grid size it needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigParts")]
pub struct PuzzleConfig {
    words: Vec<String>,
    size: Coord,
}

/// Loaded configs are rebuilt from their words, so the size is always derived.
#[derive(Deserialize)]
struct ConfigParts {
    words: Vec<String>,
}

impl TryFrom<ConfigParts> for PuzzleConfig {
    type Error = PuzzleError;

    fn try_from(parts: ConfigParts) -> Result<Self> {
        Self::new(parts.words)
    }
}

impl PuzzleConfig {
    /// Extra rows/columns added on top of the longest word or word count.
    pub const SIZE_MARGIN: usize = 5;

    /// Longest-word length assumed for an empty word list.
    pub const DEFAULT_WORD_LEN: usize = 5;

    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| normalize_word(word.as_ref().trim()))
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();
        if !words.iter().flat_map(|word| word.chars()).all(Cell::is_letter) {
            return Err(PuzzleError::InvalidLetter);
        }

        let size = Self::size_for(&words)?;
        Ok(Self { words, size })
    }

    /// Parses a comma-separated word list such as `"cat, dog,bird"`.
    pub fn parse_list(input: &str) -> Result<Self> {
        Self::new(input.split(','))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    fn size_for(words: &[String]) -> Result<Coord> {
        let longest = words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(Self::DEFAULT_WORD_LEN);
        let size = longest.max(words.len()) + Self::SIZE_MARGIN;
        Coord::try_from(size).map_err(|_| PuzzleError::TooLarge)
    }
}
