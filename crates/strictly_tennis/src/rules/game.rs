//! Game-level rules: winning a game and reaching deuce.

use super::{GAME_POINT_THRESHOLD, WIN_BY};
use crate::{Score, Side};
use tracing::instrument;

/// Checks whether `side` has just won a regular game.
///
/// A game is won on the fourth point or later with a lead of two.
#[instrument(skip(score))]
pub fn is_game_won(score: &Score, side: Side) -> bool {
    score.side(side).points() > GAME_POINT_THRESHOLD && score.points_lead(side) >= WIN_BY
}

/// Checks whether both sides sit on 40 (three points each).
#[instrument(skip(score))]
pub fn is_deuce(score: &Score) -> bool {
    score.side(Side::One).points() == GAME_POINT_THRESHOLD
        && score.side(Side::Two).points() == GAME_POINT_THRESHOLD
}
