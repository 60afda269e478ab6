//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no empty cells left to choose from")]
    NoMovesLeft,

    #[error("it is not the engine's turn to move")]
    NotEngineTurn,

    #[error("board string has wrong length: expected {expected} cells, got {got}")]
    BadBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    BadCellCharacter { character: char, position: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
