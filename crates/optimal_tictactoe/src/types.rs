//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::invariants::{BoardInvariants, InvariantSet};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns `true` for the side that maximizes utility.
    pub fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }
}

/// A square on the tic-tac-toe board.
///
/// Exactly three values exist: `Empty`, `Occupied(X)` and `Occupied(O)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Character used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every transition produces a new board and
/// leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of rows and columns.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Returns the board if it passes the board invariants: balanced mark
    /// counts and at most one player with a line.
    ///
    /// Parsing and deserialization only check shape, so boards from outside
    /// the crate go through here before they are trusted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Inconsistent`] listing every violated invariant.
    #[instrument(skip(self), fields(board = %self.to_notation()))]
    pub fn validated(self) -> Result<Self, BoardError> {
        BoardInvariants::check_all(&self)
            .map_err(|violations| BoardError::Inconsistent(violations.join("; ")))?;
        Ok(self)
    }

    /// Gets the square at the given coordinate, or `None` when out of range.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|i| self.squares[i])
    }

    /// Checks if the square at the coordinate exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns a copy with `square` placed at the coordinate.
    ///
    /// Callers validate the coordinate first.
    pub(crate) fn with(mut self, index: usize, square: Square) -> Self {
        self.squares[index] = square;
        self
    }

    /// Compact row notation, e.g. `XX./.O./...`.
    pub fn to_notation(&self) -> String {
        self.squares
            .chunks(Self::SIZE)
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.chunks(Self::SIZE).enumerate() {
            let cells = row
                .iter()
                .map(|s| s.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&cells)?;
            if r < Self::SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `/`, `|` and whitespace are separators and are skipped. Mark counts
    /// are not checked; see [`Board::validated`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|c| Square::from_symbol(c).ok_or(BoardError::InvalidCell(c)))
            .collect::<Result<Vec<_>, _>>()?;
        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardError::WrongLength(cells.len()))?;
        Ok(Self::from_squares(squares))
    }
}

/// Outcome of a position, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Winner(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

/// Error building a board from external data.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Notation did not contain exactly nine cells.
    #[display("expected 9 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// Character is not a cell symbol.
    #[display("invalid cell symbol {_0:?}")]
    InvalidCell(#[error(not(source))] char),
    /// Board is unreachable by alternating play.
    #[display("inconsistent board: {_0}")]
    Inconsistent(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_players() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_parse_notation() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 0)), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(Move::new(1, 1)), Some(Square::Occupied(Player::O)));
        assert!(board.is_empty(Move::new(0, 2)));
        assert_eq!(board.to_notation(), "XX./.O./...");
    }

    #[test]
    fn test_parse_accepts_separators_and_lowercase() {
        let a: Board = "x o -|- - -|_ _ _".parse().unwrap();
        let b: Board = "XO.......".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!("XX".parse::<Board>(), Err(BoardError::WrongLength(2)));
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        assert_eq!(
            "XZ.......".parse::<Board>(),
            Err(BoardError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_parse_accepts_unreachable_board() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
    }

    #[test]
    fn test_validated_rejects_unbalanced_marks() {
        let board: Board = "XXX/.../...".parse().unwrap();
        let err = board.validated().unwrap_err();
        assert!(matches!(err, BoardError::Inconsistent(_)));
    }

    #[test]
    fn test_validated_keeps_reachable_board() {
        let board: Board = "XO./.X./...".parse().unwrap();
        assert_eq!(board.validated(), Ok(board));
    }

    #[test]
    fn test_out_of_range_get() {
        let board = Board::new();
        assert_eq!(board.get(Move::new(3, 0)), None);
        assert!(!board.is_empty(Move::new(0, 3)));
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.");
    }

    #[test]
    fn test_board_serde() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
