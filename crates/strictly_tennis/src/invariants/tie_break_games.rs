//! Tie-break invariant: tie-breaks are only played at 6-6.

use super::Invariant;
use crate::rules::reaches_tie_break;
use crate::{GameState, Match};

/// Invariant: while in `TieBreak`, the games stand at 6-6.
pub struct TieBreakGamesInvariant;

impl Invariant<Match> for TieBreakGamesInvariant {
    fn holds(tennis_match: &Match) -> bool {
        *tennis_match.state() != GameState::TieBreak || reaches_tie_break(tennis_match.score())
    }

    fn description() -> &'static str {
        "Tie-break is only played at six games all"
    }
}
