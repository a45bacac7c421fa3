//! Balanced marks invariant: X is never behind O, and at most one ahead.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: X and O mark counts differ by zero or one, in X's favor.
///
/// X moves first and players alternate, so after every move X has
/// played as many times as O or exactly once more.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, result};

    #[test]
    fn test_empty_board_holds() {
        assert!(BalancedMarksInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_holds_along_a_game() {
        let mut board = Board::new();
        for i in [4, 0, 8, 2, 1] {
            board = result(&board, Move::from_index(i).unwrap()).unwrap();
            assert!(BalancedMarksInvariant::holds(&board));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let board: Board = "O../.../...".parse().unwrap();
        assert!(!BalancedMarksInvariant::holds(&board));
    }
}
