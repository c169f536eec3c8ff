use crate::board::{Board, Side};

/// Represents a single position in a recorded minimax game tree.
///
/// Each node stores the state of the game, the move that led to it and, once the search has
/// finished with its subtree, its minimax value and the move the player to move should pick.
#[derive(Debug, Clone)]
pub struct MinimaxNode<T: Board> {
    /// The game state that this node represents.
    pub board: T,
    /// The move that led to this node's state from its parent. `None` for the root node.
    pub prev_move: Option<T::Move>,
    /// The depth of the node in the tree.
    pub height: u32,
    /// The side to move in this node's game state.
    pub side: Side,
    /// The minimax value of the position. `None` until its subtree has been searched.
    pub value: Option<i32>,
    /// The first optimal move from this position. `None` for finished games.
    pub best_move: Option<T::Move>,
}

impl<T: Board> MinimaxNode<T> {
    /// Creates a node that has not been evaluated yet.
    pub fn new(board: T, prev_move: Option<T::Move>, height: u32) -> Self {
        let side = board.side_to_move();
        MinimaxNode {
            board,
            prev_move,
            height,
            side,
            value: None,
            best_move: None,
        }
    }

    /// Returns `true` if the position is a finished game.
    pub fn is_terminal(&self) -> bool {
        self.board.terminal()
    }
}
