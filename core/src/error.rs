use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Grid size must be positive")]
    InvalidSize,
    #[error("Grid size exceeds the supported maximum")]
    TooLarge,
    #[error("Word run leaves the grid")]
    OutOfBounds,
    #[error("Snapshot rows do not form a square grid")]
    InvalidSnapshotShape,
    #[error("Only the letters A-Z can be placed in the grid")]
    InvalidLetter,
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
