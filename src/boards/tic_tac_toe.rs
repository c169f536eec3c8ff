use crate::board::{Board, Side};
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

const SIZE: usize = 3;
const CELLS: usize = SIZE * SIZE;

/// Every winning line, in the order [`winner`] checks them: row `i` then column `i` for each
/// `i`, followed by the main diagonal and the anti-diagonal.
const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A player's symbol. `X` always moves first.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A move: the `(row, col)` coordinates of the cell to mark, both in `0..3`.
///
/// Actions order row-major, so sets of actions enumerate row by row.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is a 3x3 grid where `None` marks an empty cell. It is a plain value: every move
/// produces a new board and the board it was played on stays as it was.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Default)]
pub struct TicTacToeBoard {
    field: [[Option<Mark>; SIZE]; SIZE],
}

impl TicTacToeBoard {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            field: [[None; SIZE]; SIZE],
        }
    }

    /// Returns the mark in the given cell, `None` if it is empty or out of range.
    pub fn get(&self, action: Action) -> Option<Mark> {
        self.field
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
            .flatten()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.field
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    fn is_free(&self, action: Action) -> bool {
        matches!(
            self.field.get(action.row).and_then(|row| row.get(action.col)),
            Some(None)
        )
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.field.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('.', Mark::to_char))?;
            }
        }
        Ok(())
    }
}

impl FromStr for TicTacToeBoard {
    type Err = Error;

    /// Parses nine cells in row-major order. `X`/`O` are marks, `.`, `-`, `_` and spaces are
    /// empty cells; `/`, `|` and line breaks may separate rows.
    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(*c, '/' | '|' | '\n' | '\r'))
            .collect();
        if cells.len() != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: cells.len(),
            });
        }

        let mut board = TicTacToeBoard::new();
        for (position, &character) in cells.iter().enumerate() {
            board.field[position / SIZE][position % SIZE] = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' | ' ' => None,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
        }
        Ok(board)
    }
}

/// Returns the starting state of the board.
pub fn initial_state() -> TicTacToeBoard {
    TicTacToeBoard::new()
}

/// Returns the mark that moves next. `X` moves whenever both marks have been played equally often.
pub fn player(board: &TicTacToeBoard) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty cell.
pub fn actions(board: &TicTacToeBoard) -> BTreeSet<Action> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
        .filter(|action| board.is_free(*action))
        .collect()
}

/// Returns the board that results from `player(board)` marking `action`.
pub fn result(board: &TicTacToeBoard, action: Action) -> Result<TicTacToeBoard> {
    if !board.is_free(action) {
        return Err(Error::InvalidAction {
            action: action.to_string(),
        });
    }

    let mark = player(board);
    let mut next = *board;
    next.field[action.row][action.col] = Some(mark);
    trace!(%action, %mark, "move applied");
    Ok(next)
}

/// Returns the mark owning three in a row, if any.
///
/// Should a board hold several complete lines, the first one in scan order wins.
pub fn winner(board: &TicTacToeBoard) -> Option<Mark> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| board.field[row][col]);
        match a {
            Some(mark) if a == b && a == c => Some(mark),
            _ => None,
        }
    })
}

/// Returns `true` if the game is over.
pub fn terminal(board: &TicTacToeBoard) -> bool {
    winner(board).is_some() || actions(board).is_empty()
}

/// Returns 1 if `X` has won, -1 if `O` has won and 0 for a draw.
pub fn utility(board: &TicTacToeBoard) -> Result<i32> {
    match winner(board) {
        Some(Mark::X) => Ok(1),
        Some(Mark::O) => Ok(-1),
        None if terminal(board) => Ok(0),
        None => Err(Error::NotTerminal),
    }
}

/// Returns the optimal action for the player to move, `None` if the game is over.
pub fn minimax(board: &TicTacToeBoard) -> Result<Option<Action>> {
    crate::minimax::minimax(board)
}

impl Board for TicTacToeBoard {
    type Move = Action;

    fn side_to_move(&self) -> Side {
        match player(self) {
            Mark::X => Side::Max,
            Mark::O => Side::Min,
        }
    }

    fn actions(&self) -> BTreeSet<Self::Move> {
        actions(self)
    }

    fn result(&self, action: Self::Move) -> Result<Self> {
        result(self, action)
    }

    fn terminal(&self) -> bool {
        terminal(self)
    }

    fn utility(&self) -> Result<i32> {
        utility(self)
    }
}
