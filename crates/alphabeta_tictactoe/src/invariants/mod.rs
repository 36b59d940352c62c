//! First-class invariants for game states.
//!
//! Invariants are logical properties that must hold for every state reachable
//! from [`State::new`] through [`State::derive`]. Each one recomputes its fact
//! from the squares rather than trusting the cached line tally.

use super::state::State;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_mover;
pub mod filled_count;
pub mod single_winner;
pub mod terminal_consistent;

pub use alternating_mover::AlternatingMoverInvariant;
pub use filled_count::FilledCountInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;

/// All state invariants as a composable set.
pub type StateInvariants = (
    FilledCountInvariant,
    SingleWinnerInvariant,
    TerminalConsistentInvariant,
    AlternatingMoverInvariant,
);

/// Asserts that all state invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(state: &State) {
    if cfg!(debug_assertions)
        && let Err(violations) = StateInvariants::check_all(state)
    {
        for violation in &violations {
            warn!(description = %violation.description, "State invariant violated");
        }
        panic!("state invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_state() {
        assert!(StateInvariants::check_all(&State::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = State::new()
            .derive(0)
            .and_then(|s| s.derive(4))
            .and_then(|s| s.derive(2))
            .unwrap();
        assert!(StateInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = State::new().derive(4).unwrap();
        // Corrupt the board behind the state's back
        state.squares[0] = Square::Occupied(Player::O);

        let violations = StateInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description == FilledCountInvariant::description())
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "state invariants violated")]
    fn test_assert_invariants_panics_on_corrupt_state() {
        let mut state = State::new().derive(4).unwrap();
        state.filled = 3;
        assert_invariants(&state);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (FilledCountInvariant, AlternatingMoverInvariant);
        assert!(TwoInvariants::check_all(&State::new()).is_ok());
    }

    #[test]
    fn test_three_invariants_report_each_violation() {
        type ThreeInvariants = (
            FilledCountInvariant,
            AlternatingMoverInvariant,
            TerminalConsistentInvariant,
        );
        let mut state = State::new().derive(4).unwrap();
        state.filled = 0;
        state.mover = Player::X;

        let violations = ThreeInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
