//! A small and simple library for graph-search frontiers and minimax game search.
//!
//! The library provides two independent pieces:
//!
//! - [`frontier::Frontier`], the collection of not-yet-expanded nodes of an uninformed graph
//!   search, removing nodes either as a stack (depth-first) or as a queue (breadth-first).
//! - An exhaustive minimax search over any two-player, zero-sum game implementing
//!   [`board::Board`], with a ready-made Tic-Tac-Toe implementation.
//!
//! # Example
//!
//! ```rust
//! use search_lib::boards::tic_tac_toe::{initial_state, minimax, result, terminal, utility};
//!
//! // Let the engine play both sides
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board)?.expect("an unfinished game has a move");
//!     board = result(&board, action)?;
//! }
//!
//! // Perfect play always ends in a draw
//! assert_eq!(utility(&board)?, 0);
//! # Ok::<(), search_lib::Error>(())
//! ```

/// Contains the `Board` trait and the `Side` enum that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// Contains the library's error type.
pub mod error;
/// Contains the stack / queue frontier used by graph searches.
pub mod frontier;
/// The core module of the library, containing the minimax search.
pub mod minimax;
/// Contains the `MinimaxNode` struct, which represents a node in a recorded game tree.
pub mod minimax_node;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use error::{Error, Result};
