use crate::board::{Board, Side};
use crate::error::Result;
use crate::minimax_node::MinimaxNode;
use ego_tree::{NodeId, NodeRef, Tree};
use tracing::{debug, instrument};

/// Returns the optimal move for the side to move, `None` if the game is over.
///
/// The maximizing side picks the first move with the highest [`min_val`], the minimizing side
/// the first move with the lowest [`max_val`], in the enumeration order of [`Board::actions`].
#[instrument(level = "debug", skip_all)]
pub fn minimax<T: Board>(board: &T) -> Result<Option<T::Move>> {
    if board.terminal() {
        return Ok(None);
    }

    let side = board.side_to_move();
    let mut best: Option<(i32, T::Move)> = None;
    for action in board.actions() {
        let next = board.result(action)?;
        let value = match side {
            Side::Max => min_val(&next)?,
            Side::Min => max_val(&next)?,
        };
        if best.is_none_or(|(best_value, _)| improves(side, value, best_value)) {
            best = Some((value, action));
        }
    }

    debug!(best_move = ?best.map(|(_, action)| action), "minimax move chosen");
    Ok(best.map(|(_, action)| action))
}

/// Value of `board` when the maximizing side is to move.
pub fn max_val<T: Board>(board: &T) -> Result<i32> {
    if board.terminal() {
        return board.utility();
    }

    let mut value = i32::MIN;
    for action in board.actions() {
        value = value.max(min_val(&board.result(action)?)?);
    }
    Ok(value)
}

/// Value of `board` when the minimizing side is to move.
pub fn min_val<T: Board>(board: &T) -> Result<i32> {
    if board.terminal() {
        return board.utility();
    }

    let mut value = i32::MAX;
    for action in board.actions() {
        value = value.min(max_val(&board.result(action)?)?);
    }
    Ok(value)
}

fn improves(side: Side, value: i32, best_value: i32) -> bool {
    match side {
        Side::Max => value > best_value,
        Side::Min => value < best_value,
    }
}

fn worst_value(side: Side) -> i32 {
    match side {
        Side::Max => i32::MIN,
        Side::Min => i32::MAX,
    }
}

/// The result of a [`MinimaxSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// The first optimal move, `None` if the root is a finished game.
    pub best_move: Option<M>,
    /// The minimax value of the root position.
    pub value: i32,
    /// Number of positions evaluated, the root included.
    pub nodes_visited: u64,
}

/// An exhaustive minimax search that keeps statistics and can record the explored game tree.
///
/// It picks the same moves as [`minimax`].
pub struct MinimaxSearch<T: Board> {
    board: T,
    record_tree: bool,
    tree: Option<Tree<MinimaxNode<T>>>,
    nodes_visited: u64,
}

impl<T: Board + Default> Default for MinimaxSearch<T> {
    fn default() -> Self {
        MinimaxSearchBuilder::new(T::default()).build()
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder<T: Board> {
    board: T,
    record_tree: bool,
}

impl<T: Board> MinimaxSearchBuilder<T> {
    /// Creates a new builder with the given root position.
    pub fn new(board: T) -> Self {
        Self {
            board,
            record_tree: false,
        }
    }

    /// Enables or disables keeping the explored game tree after the search.
    ///
    /// The full Tic-Tac-Toe tree from the empty board has 549 946 positions.
    pub fn with_tree_recording(mut self, record_tree: bool) -> Self {
        self.record_tree = record_tree;
        self
    }

    /// Builds the `MinimaxSearch` instance with the configured parameters.
    pub fn build(self) -> MinimaxSearch<T> {
        MinimaxSearch {
            board: self.board,
            record_tree: self.record_tree,
            tree: None,
            nodes_visited: 0,
        }
    }
}

impl<T: Board> MinimaxSearch<T> {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder(board: T) -> MinimaxSearchBuilder<T> {
        MinimaxSearchBuilder::new(board)
    }

    /// Creates a search with the default configuration.
    pub fn new(board: T) -> Self {
        MinimaxSearchBuilder::new(board).build()
    }

    /// Searches the whole game tree below the root position.
    #[instrument(level = "debug", skip(self), fields(record_tree = self.record_tree))]
    pub fn search(&mut self) -> Result<SearchOutcome<T::Move>> {
        self.nodes_visited = 0;
        self.tree = self
            .record_tree
            .then(|| Tree::new(MinimaxNode::new(self.board.clone(), None, 0)));

        let root = self.board.clone();
        let (value, best_move) = self.evaluate(&root, None, None, 0)?;
        let outcome = SearchOutcome {
            best_move,
            value,
            nodes_visited: self.nodes_visited,
        };

        debug!(
            best_move = ?outcome.best_move,
            value = outcome.value,
            nodes_visited = outcome.nodes_visited,
            "minimax search finished"
        );
        Ok(outcome)
    }

    /// Returns the game tree recorded by the last search, if recording is enabled.
    pub fn get_tree(&self) -> Option<&Tree<MinimaxNode<T>>> {
        self.tree.as_ref()
    }

    /// Returns the root node of the recorded game tree.
    pub fn get_root(&self) -> Option<NodeRef<'_, MinimaxNode<T>>> {
        self.tree.as_ref().map(|tree| tree.root())
    }

    /// Returns the moves played from the root when both sides always pick their first optimal
    /// move. Empty unless a tree has been recorded.
    pub fn principal_variation(&self) -> Vec<T::Move> {
        let mut line = Vec::new();
        let mut current = self.get_root();
        while let Some(node) = current {
            let Some(best_move) = node.value().best_move else {
                break;
            };
            line.push(best_move);
            current = node
                .children()
                .find(|child| child.value().prev_move == Some(best_move));
        }
        line
    }

    fn evaluate(
        &mut self,
        board: &T,
        parent: Option<NodeId>,
        prev_move: Option<T::Move>,
        height: u32,
    ) -> Result<(i32, Option<T::Move>)> {
        self.nodes_visited += 1;
        let node_id = self.record(board, parent, prev_move, height);

        let (value, best_move) = if board.terminal() {
            (board.utility()?, None)
        } else {
            let side = board.side_to_move();
            let mut best: Option<(i32, T::Move)> = None;
            for action in board.actions() {
                let next = board.result(action)?;
                let (value, _) = self.evaluate(&next, node_id, Some(action), height + 1)?;
                if best.is_none_or(|(best_value, _)| improves(side, value, best_value)) {
                    best = Some((value, action));
                }
            }
            match best {
                Some((value, action)) => (value, Some(action)),
                None => (worst_value(side), None),
            }
        };

        if let (Some(id), Some(tree)) = (node_id, self.tree.as_mut()) {
            if let Some(mut node) = tree.get_mut(id) {
                let data = node.value();
                data.value = Some(value);
                data.best_move = best_move;
            }
        }
        Ok((value, best_move))
    }

    fn record(
        &mut self,
        board: &T,
        parent: Option<NodeId>,
        prev_move: Option<T::Move>,
        height: u32,
    ) -> Option<NodeId> {
        let tree = self.tree.as_mut()?;
        match parent {
            None => Some(tree.root().id()),
            Some(parent_id) => {
                let mut parent = tree.get_mut(parent_id)?;
                let node = MinimaxNode::new(board.clone(), prev_move, height);
                Some(parent.append(node).id())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::tic_tac_toe::{Action, TicTacToeBoard, initial_state};
    use crate::error::Error;
    use std::collections::BTreeSet;

    /// Players alternately take one or two stones; whoever takes the last stone wins.
    #[derive(Debug, Clone)]
    struct TakeAway {
        pile: u8,
        min_to_move: bool,
    }

    impl TakeAway {
        fn new(pile: u8) -> Self {
            Self {
                pile,
                min_to_move: false,
            }
        }
    }

    impl Board for TakeAway {
        type Move = u8;

        fn side_to_move(&self) -> Side {
            if self.min_to_move { Side::Min } else { Side::Max }
        }

        fn actions(&self) -> BTreeSet<u8> {
            (1..=2).filter(|take| *take <= self.pile).collect()
        }

        fn result(&self, action: u8) -> Result<Self> {
            if !self.actions().contains(&action) {
                return Err(Error::InvalidAction {
                    action: action.to_string(),
                });
            }
            Ok(Self {
                pile: self.pile - action,
                min_to_move: !self.min_to_move,
            })
        }

        fn terminal(&self) -> bool {
            self.pile == 0
        }

        fn utility(&self) -> Result<i32> {
            match (self.terminal(), self.side_to_move()) {
                (false, _) => Err(Error::NotTerminal),
                (true, Side::Max) => Ok(-1),
                (true, Side::Min) => Ok(1),
            }
        }
    }

    fn board(cells: &str) -> TicTacToeBoard {
        cells.parse().unwrap()
    }

    #[test]
    fn take_away_leaves_a_multiple_of_three() {
        assert_eq!(minimax(&TakeAway::new(4)), Ok(Some(1)));
        assert_eq!(minimax(&TakeAway::new(5)), Ok(Some(2)));
        assert_eq!(max_val(&TakeAway::new(4)), Ok(1));
    }

    #[test]
    fn losing_side_takes_first_move() {
        assert_eq!(minimax(&TakeAway::new(3)), Ok(Some(1)));
        assert_eq!(max_val(&TakeAway::new(3)), Ok(-1));
        assert_eq!(min_val(&TakeAway::new(3).result(1).unwrap()), Ok(-1));
    }

    #[test]
    fn finished_game_has_no_move() {
        assert_eq!(minimax(&TakeAway::new(0)), Ok(None));
        assert_eq!(max_val(&TakeAway::new(0)), Ok(-1));
    }

    #[test]
    fn search_counts_every_position() {
        // arrange
        let mut search = MinimaxSearch::new(TakeAway::new(3));

        // act
        let outcome = search.search().unwrap();

        // assert
        assert_eq!(
            outcome,
            SearchOutcome {
                best_move: Some(1),
                value: -1,
                nodes_visited: 7,
            }
        );
        assert!(search.get_tree().is_none());
        assert!(search.principal_variation().is_empty());
    }

    #[test]
    fn search_agrees_with_minimax() {
        for cells in ["XOX/OXO/...", "X.O/.X./...", "X../.../...", "XO./.../...", "XXX/OO./..."] {
            let board = board(cells);
            let outcome = MinimaxSearch::new(board).search().unwrap();
            assert_eq!(Ok(outcome.best_move), minimax(&board), "{cells}");
        }
    }

    #[test]
    fn empty_board_is_a_draw() {
        // arrange
        let mut search = MinimaxSearch::<TicTacToeBoard>::default();

        // act
        let outcome = search.search().unwrap();

        // assert
        assert_eq!(outcome.best_move, Some(Action::new(0, 0)));
        assert_eq!(outcome.value, 0);
        assert_eq!(outcome.nodes_visited, 549_946);
        assert_eq!(minimax(&initial_state()), Ok(Some(Action::new(0, 0))));
    }

    #[test]
    fn records_take_away_tree() {
        // arrange
        let mut search = MinimaxSearch::builder(TakeAway::new(4))
            .with_tree_recording(true)
            .build();

        // act
        let outcome = search.search().unwrap();

        // assert
        let tree = search.get_tree().unwrap();
        assert_eq!(tree.nodes().count() as u64, outcome.nodes_visited);
        let root = search.get_root().unwrap();
        assert_eq!(root.value().value, Some(outcome.value));
        assert_eq!(root.value().side, Side::Max);
        assert_eq!(root.children().count(), 2);
        assert_eq!(search.principal_variation(), vec![1, 1, 2]);
    }

    #[test]
    fn records_tic_tac_toe_tree() {
        // arrange
        let board = board("X.O/.X./...");
        let mut search = MinimaxSearch::builder(board)
            .with_tree_recording(true)
            .build();

        // act
        let outcome = search.search().unwrap();

        // assert
        let root = search.get_root().unwrap();
        assert_eq!(root.value().value, Some(0));
        assert_eq!(root.children().count(), 6);
        for child in root.children() {
            let data = child.value();
            assert_eq!(data.height, 1);
            assert_eq!(data.side, Side::Max);
            assert!(data.value.is_some());
        }

        let line = search.principal_variation();
        assert_eq!(line.first(), outcome.best_move.as_ref());
        let mut current = board;
        for action in &line {
            current = current.result(*action).unwrap();
        }
        assert!(current.terminal());
        assert_eq!(current.utility(), Ok(0));
    }

    #[test]
    fn search_on_finished_game() {
        let mut search = MinimaxSearch::builder(board("OX./OX./O.X"))
            .with_tree_recording(true)
            .build();
        let outcome = search.search().unwrap();
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.value, -1);
        assert_eq!(outcome.nodes_visited, 1);
        assert!(search.get_root().unwrap().value().is_terminal());
        assert!(search.principal_variation().is_empty());
    }
}
