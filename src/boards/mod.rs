//! Contains pre-made implementations of the `Board` trait for common games.

/// A `Board` implementation for the game of Tic-Tac-Toe, plus its free-function API.
pub mod tic_tac_toe;
