//! Set-level rules: closing a set and entering the tie-break.

use super::{SET_GAMES, SET_WIN_MARGIN, TIEBREAK_AT};
use crate::{Score, Side};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the side that has taken the set on games, if any.
///
/// Six games with a two-game lead closes the set. Sets decided by a
/// tie-break are awarded by the tie-break transition itself.
#[instrument(skip(score))]
pub fn set_winner(score: &Score) -> Option<Side> {
    Side::iter().find(|&side| {
        score.side(side).games() >= SET_GAMES && score.games_lead(side) >= SET_WIN_MARGIN
    })
}

/// Checks whether the games stand at 6-6.
#[instrument(skip(score))]
pub fn reaches_tie_break(score: &Score) -> bool {
    score.side(Side::One).games() == TIEBREAK_AT && score.side(Side::Two).games() == TIEBREAK_AT
}
