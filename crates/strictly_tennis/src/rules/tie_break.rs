//! Tie-break rules.

use super::{TIEBREAK_POINTS, WIN_BY};
use crate::{Score, Side};
use tracing::instrument;

/// Checks whether `side` has won the tie-break: seven points and a lead of two.
#[instrument(skip(score))]
pub fn is_tie_break_won(score: &Score, side: Side) -> bool {
    score.side(side).points() >= TIEBREAK_POINTS && score.points_lead(side) >= WIN_BY
}
