//! Contract-based validation for scoring a point.
//!
//! Contracts formalize the Hoare-style reasoning `{P} point {Q}` around
//! every call to the engine.

use crate::invariants::{InvariantSet, MatchInvariants};
use crate::{Match, Point, ScoringError, Side};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ScoringError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ScoringError>;
}

// ─────────────────────────────────────────────────────────────
//  Point Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match must still be in play.
pub struct MatchInProgress;

impl MatchInProgress {
    /// Rejects points once a winner is decided.
    #[instrument(skip(tennis_match), fields(match_id = %tennis_match.id()))]
    pub fn check(tennis_match: &Match) -> Result<(), ScoringError> {
        if tennis_match.is_finished() {
            warn!("Point submitted to a finished match");
            Err(ScoringError::MatchFinished)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Point Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: set counts never go down.
pub struct SetsNonDecreasing;

impl SetsNonDecreasing {
    /// Compares set counts before and after a point.
    #[instrument(skip_all)]
    pub fn check(before: &Match, after: &Match) -> Result<(), ScoringError> {
        for side in Side::iter() {
            let was = before.score().side(side).sets();
            let now = after.score().side(side).sets();
            if now < was {
                warn!(%side, was, now, "Set count decreased");
                return Err(ScoringError::InvariantViolation(format!(
                    "sets for {} went from {} to {}",
                    side, was, now
                )));
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Point Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for scoring a point.
///
/// Preconditions:
/// - Match is not finished
///
/// Postconditions:
/// - Sets never decrease
/// - Winner present exactly when finished
/// - Tie-break only at 6-6
/// - Deuce/advantage point shapes hold
pub struct PointContract;

impl Contract<Match, Point> for PointContract {
    fn pre(tennis_match: &Match, _point: &Point) -> Result<(), ScoringError> {
        MatchInProgress::check(tennis_match)
    }

    fn post(before: &Match, after: &Match) -> Result<(), ScoringError> {
        SetsNonDecreasing::check(before, after)?;
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(match_id = %after.id(), %descriptions, "Postcondition failed");
            ScoringError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, MatchId, Score, SideScore};

    #[test]
    fn test_precondition_open_match() {
        let tennis_match = Match::new("Ann", "Bea");
        assert!(PointContract::pre(&tennis_match, &Point::new(Side::One)).is_ok());
    }

    #[test]
    fn test_precondition_finished_match() {
        let mut score = Score::from_sides(SideScore::new(0, 0, 2), SideScore::default());
        score.set_winner(Side::One);
        let tennis_match = Match::restore(MatchId::new(), "Ann", "Bea", score, GameState::Finished);

        assert_eq!(
            PointContract::pre(&tennis_match, &Point::new(Side::Two)),
            Err(ScoringError::MatchFinished)
        );
    }

    #[test]
    fn test_postcondition_detects_lost_set() {
        let before_score = Score::from_sides(SideScore::new(0, 0, 1), SideScore::default());
        let before = Match::restore(
            MatchId::new(),
            "Ann",
            "Bea",
            before_score,
            GameState::Regular,
        );
        let after = Match::restore(
            *before.id(),
            "Ann",
            "Bea",
            Score::new(),
            GameState::Regular,
        );

        assert!(matches!(
            PointContract::post(&before, &after),
            Err(ScoringError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_bad_advantage() {
        let before = Match::new("Ann", "Bea");
        let score = Score::from_sides(SideScore::new(1, 0, 0), SideScore::default());
        let advantage = GameState::Advantage(Side::One);
        let after = Match::restore(*before.id(), "Ann", "Bea", score, advantage);

        assert!(PointContract::post(&before, &after).is_err());
    }
}
