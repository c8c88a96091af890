use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid size and positions.
pub type Coord = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Uppercases a word so lookups and comparisons are case-insensitive.
pub fn normalize_word(word: &str) -> String {
    word.to_uppercase()
}

/// Direction a word runs in from its starting cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Coordinates of a run of `len` cells starting at `start`.
    ///
    /// The run is not bounds checked, callers compare against the grid size first.
    pub(crate) fn run(self, start: Coord2, len: usize) -> impl Iterator<Item = Coord2> {
        let (row, col) = start;
        (0..len).map(move |offset| {
            let offset = offset as Coord;
            match self {
                Self::Horizontal => (row, col + offset),
                Self::Vertical => (row + offset, col),
            }
        })
    }

    /// Position one past the last cell of a `len`-long run, along this orientation's axis.
    pub(crate) fn run_end(self, start: Coord2, len: usize) -> usize {
        let (row, col) = start;
        let axis = match self {
            Self::Horizontal => col,
            Self::Vertical => row,
        };
        usize::from(axis) + len
    }
}
