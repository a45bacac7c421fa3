//! Kani arbitrary implementations for tic-tac-toe types.

#[cfg(kani)]
use crate::{Board, Move, Player, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        // One past the edge so out-of-range moves are explored too.
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row <= 3 && col <= 3);
        Move::new(row, col)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_squares(kani::any())
    }
}
