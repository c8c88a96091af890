use core::fmt;
use serde::{Deserialize, Serialize};

/// Content of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Letter(char),
}

impl Cell {
    /// Character used when rendering an empty cell.
    pub const EMPTY_CHAR: char = '.';

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether `letter` may be written here without contradicting what is already placed.
    pub fn accepts(self, letter: char) -> bool {
        match self {
            Self::Empty => true,
            Self::Letter(current) => current == letter,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_CHAR,
            Self::Letter(letter) => letter,
        }
    }

    /// Letters a cell may hold.
    pub const fn is_letter(c: char) -> bool {
        c.is_ascii_uppercase()
    }

    /// Only `A..=Z` and the empty marker are cells.
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Empty => true,
            Self::Letter(letter) => Self::is_letter(letter),
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        if c == Self::EMPTY_CHAR {
            Some(Self::Empty)
        } else if Self::is_letter(c) {
            Some(Self::Letter(c))
        } else {
            None
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
