use super::*;

/// Tries a bounded number of uniformly random starting cells and orientations per word and
/// keeps the first one that fits.
///
/// This is best effort: a word can be skipped even when some layout for it exists.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPlacer<S> {
    source: S,
}

impl<S: RandomSource> RandomPlacer<S> {
    /// Attempts made for a single word before giving up on it.
    pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn place_word(&mut self, grid: &mut Grid, word: &str) -> Option<(Coord2, Orientation)> {
        for attempt in 0..Self::MAX_PLACEMENT_ATTEMPTS {
            let size = usize::from(grid.size());
            let row = self.source.next_index(size) as Coord;
            let col = self.source.next_index(size) as Coord;
            let orientation = Orientation::from_horizontal(self.source.next_bool());

            if grid.can_place_word(word, (row, col), orientation) {
                // can_place_word already checked the bounds
                grid.place_word(word, (row, col), orientation).ok()?;
                log::debug!(
                    "Placed {} at ({}, {}) {:?} after {} attempt(s)",
                    word,
                    row,
                    col,
                    orientation,
                    attempt + 1
                );
                return Some(((row, col), orientation));
            }
        }
        None
    }
}

impl<S: RandomSource> WordPlacer for RandomPlacer<S> {
    fn place_words<W: AsRef<str>>(&mut self, grid: &mut Grid, words: &[W]) -> PlacementReport {
        let mut report = PlacementReport::default();
        for word in words {
            let word = word.as_ref();
            match self.place_word(grid, word) {
                Some(_) => report.placed.push(normalize_word(word)),
                None => {
                    log::warn!(
                        "Could not place {} after {} attempts, skipping it",
                        word,
                        Self::MAX_PLACEMENT_ATTEMPTS
                    );
                    report.skipped.push(normalize_word(word));
                }
            }
        }
        report
    }
}
