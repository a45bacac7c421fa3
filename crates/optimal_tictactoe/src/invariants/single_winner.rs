//! Single winner invariant: at most one player owns a complete line.

use super::Invariant;
use crate::rules::win::{LINES, line_owner};
use crate::{Board, Player};

/// Invariant: X and O do not both have three in a row.
///
/// Play stops at the first completed line, so a reachable board never
/// shows lines for both players.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owns = |player: Player| {
            LINES
                .into_iter()
                .any(|line| line_owner(board, line) == Some(player))
        };
        !(owns(Player::X) && owns(Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
