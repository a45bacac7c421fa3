//! Win detection logic for tic-tac-toe.

use crate::{Board, Move, Player};
use tracing::instrument;

/// The eight winning lines in scan order: rows top to bottom, columns
/// left to right, then the main and anti diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move { row: 0, col: 0 }, Move { row: 0, col: 1 }, Move { row: 0, col: 2 }],
    [Move { row: 1, col: 0 }, Move { row: 1, col: 1 }, Move { row: 1, col: 2 }],
    [Move { row: 2, col: 0 }, Move { row: 2, col: 1 }, Move { row: 2, col: 2 }],
    // Columns
    [Move { row: 0, col: 0 }, Move { row: 1, col: 0 }, Move { row: 2, col: 0 }],
    [Move { row: 0, col: 1 }, Move { row: 1, col: 1 }, Move { row: 2, col: 1 }],
    [Move { row: 0, col: 2 }, Move { row: 1, col: 2 }, Move { row: 2, col: 2 }],
    // Diagonals
    [Move { row: 0, col: 0 }, Move { row: 1, col: 1 }, Move { row: 2, col: 2 }],
    [Move { row: 0, col: 2 }, Move { row: 1, col: 1 }, Move { row: 2, col: 0 }],
];

/// Owner of a fully matched line, if any.
pub fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    let sq = board.get(a)?;
    if sq == board.get(b)? && sq == board.get(c)? {
        sq.player()
    } else {
        None
    }
}

/// Returns the winner of the board, if there is one.
///
/// Lines are scanned in [`LINES`] order and the first complete line
/// decides. Boards reachable by legal play never have two owners.
#[instrument(level = "trace", skip(board), fields(board = %board.to_notation()))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.OX")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("OXX/.OX/..O")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./O../...")), None);
    }

    #[test]
    fn test_double_line_reports_first_in_scan_order() {
        // X completes row 0 and column 0 with the same move.
        assert_eq!(winner(&board("XXX/XOO/XOO")), Some(Player::X));
    }
}
