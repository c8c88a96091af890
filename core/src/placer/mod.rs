use alloc::string::String;
use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Strategy that lays a list of words out on a grid.
pub trait WordPlacer {
    fn place_words<S: AsRef<str>>(&mut self, grid: &mut Grid, words: &[S]) -> PlacementReport;
}

/// Which words made it onto the grid.
///
/// Skipping a word is not an error, the puzzle is still playable without it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub placed: Vec<String>,
    pub skipped: Vec<String>,
}

impl PlacementReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
