//! Winner invariant: a winner exists exactly when the match is finished.

use super::Invariant;
use crate::Match;
use crate::rules::MATCH_SETS;

/// Invariant: the winner is set iff the state is `Finished`, and the winner
/// holds the winning number of sets.
pub struct WinnerConsistentInvariant;

impl Invariant<Match> for WinnerConsistentInvariant {
    fn holds(tennis_match: &Match) -> bool {
        match tennis_match.winner() {
            Some(side) => {
                tennis_match.is_finished()
                    && tennis_match.score().side(side).sets() == MATCH_SETS
            }
            None => !tennis_match.is_finished(),
        }
    }

    fn description() -> &'static str {
        "Winner is set exactly when the match is finished"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, MatchId, Score, SideScore};

    #[test]
    fn test_in_progress_without_winner_holds() {
        assert!(WinnerConsistentInvariant::holds(&Match::new("Ann", "Bea")));
    }

    #[test]
    fn test_finished_without_winner_violates() {
        let score = Score::from_sides(SideScore::new(0, 0, 2), SideScore::default());
        let tennis_match =
            Match::restore(MatchId::new(), "Ann", "Bea", score, GameState::Finished);
        assert!(!WinnerConsistentInvariant::holds(&tennis_match));
    }
}
