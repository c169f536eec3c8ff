//! Error types for the search library.

use thiserror::Error;

/// Main error type of the library.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot remove a node: the frontier is empty")]
    EmptyFrontier,

    #[error("invalid action {action}: the cell is occupied or out of range")]
    InvalidAction { action: String },

    #[error("utility is only defined for finished games")]
    NotTerminal,

    #[error("invalid board length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Convenience type alias for results using the library's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
