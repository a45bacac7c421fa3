//! Move coordinates and the errors raised when applying them.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: the `(row, col)` of the square to mark.
///
/// The mark itself is not part of the move; it is always the mark of
/// the player to move on the board the move is applied to.
///
/// Coordinates are unchecked on construction so that a caller can ask for
/// an out-of-range square and be told it is illegal. Moves order by row,
/// then column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move for a row-major square index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// Row-major square index, or `None` when either coordinate exceeds 2.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then(|| self.row * 3 + self.col)
    }

    /// Returns `true` when both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.index().is_some()
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error that can occur when applying a move.
///
/// Both variants are an illegal move: the caller asked for a square
/// that is not in the board's set of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the coordinate is already occupied.
    #[display("Illegal move: square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Move),

    /// The coordinate is off the 3x3 board.
    #[display("Illegal move: {_0} is out of range")]
    OutOfRange(#[error(not(source))] Move),
}

impl MoveError {
    /// The rejected move.
    pub fn rejected(&self) -> Move {
        match self {
            MoveError::SquareOccupied(mv) | MoveError::OutOfRange(mv) => *mv,
        }
    }
}
