//! First-class invariants for tic-tac-toe boards.
//!
//! A board built from outside data (parsed notation, deserialized JSON)
//! may describe a position that alternating play can never reach. These
//! invariants describe what reachable boards look like;
//! [`Board::validated`](crate::Board::validated) checks them.

#[cfg(kani)]
mod verification;

pub mod balanced_marks;
pub mod single_winner;

pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the description of each
    /// one that failed.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let failed: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter_map(|(ok, description)| (!ok).then_some(description))
        .collect();
        if failed.is_empty() { Ok(()) } else { Err(failed) }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);
