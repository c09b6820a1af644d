//! First-class invariants for a tennis match.
//!
//! Invariants are logical properties that must hold after every point.
//! They are testable independently and serve as documentation of the
//! guarantees the engine makes about a [`Match`](crate::Match).

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
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

pub mod deuce_shape;
pub mod tie_break_games;
pub mod winner_consistent;

pub use deuce_shape::DeuceShapeInvariant;
pub use tie_break_games::TieBreakGamesInvariant;
pub use winner_consistent::WinnerConsistentInvariant;

/// All match invariants as a composable set.
pub type MatchInvariants = (
    WinnerConsistentInvariant,
    TieBreakGamesInvariant,
    DeuceShapeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Match, MatchId, Score, Side, SideScore};

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        let tennis_match = Match::new("Ann", "Bea");
        assert!(MatchInvariants::check_all(&tennis_match).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_single_violation() {
        let score = Score::from_sides(SideScore::new(0, 5, 1), SideScore::new(0, 6, 1));
        let broken = Match::restore(MatchId::new(), "Ann", "Bea", score, GameState::TieBreak);
        let violations = MatchInvariants::check_all(&broken).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(TieBreakGamesInvariant::description())]
        );
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // A winner while the game is still in a tie-break, at 5-6 games.
        let mut score = Score::from_sides(SideScore::new(0, 5, 2), SideScore::new(0, 6, 1));
        score.set_winner(Side::One);
        let broken = Match::restore(MatchId::new(), "Ann", "Bea", score, GameState::TieBreak);

        let violations = MatchInvariants::check_all(&broken).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation::new(WinnerConsistentInvariant::description()),
                InvariantViolation::new(TieBreakGamesInvariant::description()),
            ]
        );
    }

    #[test]
    fn test_finished_without_winner_and_bad_advantage() {
        let score = Score::from_sides(SideScore::new(1, 0, 0), SideScore::default());
        let finished = Match::restore(MatchId::new(), "Ann", "Bea", score, GameState::Finished);
        assert_eq!(MatchInvariants::check_all(&finished).unwrap_err().len(), 1);

        let mut won = score;
        won.set_winner(Side::Two);
        let advantage = GameState::Advantage(Side::One);
        let broken = Match::restore(MatchId::new(), "Ann", "Bea", won, advantage);
        assert_eq!(MatchInvariants::check_all(&broken).unwrap_err().len(), 2);
    }
}
