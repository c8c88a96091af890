use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square letter matrix together with the cells each placed word occupies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    cells: Array2<Cell>,
    word_positions: BTreeMap<String, Vec<Coord2>>,
}

#[derive(Deserialize)]
struct GridParts {
    cells: Array2<Cell>,
    word_positions: BTreeMap<String, Vec<Coord2>>,
}

impl TryFrom<GridParts> for Grid {
    type Error = PuzzleError;

    fn try_from(parts: GridParts) -> Result<Self> {
        validate_cells(&parts.cells)?;
        Ok(Self {
            cells: parts.cells,
            word_positions: parts.word_positions,
        })
    }
}

impl Grid {
    /// Number of letters drawn from when filling empty cells.
    pub const ALPHABET_LEN: usize = 26;

    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(PuzzleError::InvalidSize);
        }
        let size = usize::from(size);
        Ok(Self {
            cells: Array2::from_elem((size, size), Cell::Empty),
            word_positions: BTreeMap::new(),
        })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(PuzzleError::OutOfBounds)
        }
    }

    /// Checks that `word` fits inside the grid from `start` and only crosses cells holding
    /// the same letter.
    pub fn can_place_word(&self, word: &str, start: Coord2, orientation: Orientation) -> bool {
        let Ok(letters) = letters_of(word) else {
            return false;
        };
        self.fits(start, orientation, letters.len())
            && orientation
                .run(start, letters.len())
                .zip(letters)
                .all(|(coords, letter)| self[coords].accepts(letter))
    }

    /// Writes `word` starting at `start` and records where it went.
    ///
    /// Only the bounds and the alphabet are checked. Conflicting letters are overwritten, so
    /// callers are expected to ask [`Grid::can_place_word`] first.
    pub fn place_word(
        &mut self,
        word: &str,
        start: Coord2,
        orientation: Orientation,
    ) -> Result<()> {
        let letters = letters_of(word)?;
        if !self.fits(start, orientation, letters.len()) {
            return Err(PuzzleError::OutOfBounds);
        }

        let positions: Vec<Coord2> = orientation.run(start, letters.len()).collect();
        for (&coords, letter) in positions.iter().zip(letters) {
            self.cells[coords.to_nd_index()] = Cell::Letter(letter);
        }
        self.word_positions.insert(normalize_word(word), positions);
        Ok(())
    }

    /// Replaces every empty cell with a uniformly random letter `A..=Z`, returning how many
    /// cells were filled.
    pub fn fill_empty_with_random_letters<S>(&mut self, source: &mut S) -> usize
    where
        S: RandomSource + ?Sized,
    {
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_empty()) {
            let offset = source.next_index(Self::ALPHABET_LEN) as u8;
            *cell = Cell::Letter(char::from(b'A' + offset));
            filled += 1;
        }
        filled
    }

    pub fn grid_copy(&self) -> GridSnapshot {
        GridSnapshot {
            cells: self.cells.clone(),
        }
    }

    /// Replaces the whole matrix with `snapshot`, adopting its size.
    ///
    /// Recorded word positions are left untouched.
    pub fn load_from_copy(&mut self, snapshot: &GridSnapshot) {
        if snapshot.size() != self.size() {
            log::debug!(
                "Loading {0}x{0} snapshot into {1}x{1} grid",
                snapshot.size(),
                self.size()
            );
        }
        self.cells = snapshot.cells.clone();
    }

    /// Cells spelling `word`, in order. Empty if the word was never placed.
    pub fn word_positions(&self, word: &str) -> &[Coord2] {
        self.word_positions
            .get(&normalize_word(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn placed_words(&self) -> impl Iterator<Item = &str> {
        self.word_positions.keys().map(String::as_str)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_filled(&self) -> bool {
        self.empty_count() == 0
    }

    fn fits(&self, start: Coord2, orientation: Orientation, len: usize) -> bool {
        self.validate_coords(start).is_ok()
            && orientation.run_end(start, len) <= usize::from(self.size())
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.cells)
    }
}

/// Independent copy of a grid's letters, used to restore an earlier rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotParts")]
pub struct GridSnapshot {
    cells: Array2<Cell>,
}

#[derive(Deserialize)]
struct SnapshotParts {
    cells: Array2<Cell>,
}

impl TryFrom<SnapshotParts> for GridSnapshot {
    type Error = PuzzleError;

    fn try_from(parts: SnapshotParts) -> Result<Self> {
        validate_cells(&parts.cells)?;
        Ok(Self { cells: parts.cells })
    }
}

impl GridSnapshot {
    /// Builds a snapshot from rows of `A..=Z`, `.` standing for an empty cell.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 || Coord::try_from(size).is_err() {
            return Err(PuzzleError::InvalidSnapshotShape);
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let before = cells.len();
            for c in row.as_ref().chars() {
                cells.push(Cell::from_char(c).ok_or(PuzzleError::InvalidLetter)?);
            }
            if cells.len() - before != size {
                return Err(PuzzleError::InvalidSnapshotShape);
            }
        }

        let cells = Array2::from_shape_vec((size, size), cells)
            .map_err(|_| PuzzleError::InvalidSnapshotShape)?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.cells)
    }
}

fn write_rows(f: &mut fmt::Formatter<'_>, cells: &Array2<Cell>) -> fmt::Result {
    for row in cells.rows() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cell)?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}

/// Square, non-empty, addressable by [`Coord`], holding only valid cells.
fn validate_cells(cells: &Array2<Cell>) -> Result<()> {
    let (rows, cols) = cells.dim();
    if rows != cols || rows == 0 || Coord::try_from(rows).is_err() {
        return Err(PuzzleError::InvalidSnapshotShape);
    }
    if !cells.iter().all(|cell| cell.is_valid()) {
        return Err(PuzzleError::InvalidLetter);
    }
    Ok(())
}

fn letters_of(word: &str) -> Result<Vec<char>> {
    let letters: Vec<char> = normalize_word(word).chars().collect();
    if letters.iter().all(|&letter| Cell::is_letter(letter)) {
        Ok(letters)
    } else {
        Err(PuzzleError::InvalidLetter)
    }
}
