use crate::error::Result;
use std::collections::BTreeSet;
use std::fmt::Debug;

/// The central trait of the library, defining the interface for a two-player, zero-sum game state.
///
/// To run the minimax search on a custom game, this trait must be implemented.
/// Implementations are treated as immutable values: applying a move produces a new state and
/// never changes the state it was applied to.
pub trait Board: Clone {
    /// The type representing a move in the game. Moves are ordered so that the set returned by
    /// [`Board::actions`] has a stable enumeration order, which the search uses to break ties.
    type Move: Copy + Ord + Debug;

    /// Returns which side of the search is to move on this state.
    fn side_to_move(&self) -> Side;

    /// Returns the set of all legal moves available from the current state.
    fn actions(&self) -> BTreeSet<Self::Move>;

    /// Returns the state that results from playing `action`, leaving `self` untouched.
    ///
    /// Fails with [`crate::Error::InvalidAction`] if `action` is not one of [`Board::actions`].
    fn result(&self, action: Self::Move) -> Result<Self>;

    /// Returns `true` if the game is over.
    fn terminal(&self) -> bool;

    /// Returns the value of a finished game from the maximizing side's perspective.
    ///
    /// Fails with [`crate::Error::NotTerminal`] if the game is still in progress.
    fn utility(&self) -> Result<i32>;
}

/// The role of the player to move from the perspective of the minimax search.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Side {
    /// The player trying to maximize the utility. Moves first.
    Max,
    /// The player trying to minimize the utility.
    Min,
}
