//! Match outcome rule.

use super::MATCH_SETS;
use crate::{Score, Side};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the side that has reached the winning number of sets, if any.
#[instrument(skip(score))]
pub fn match_winner(score: &Score) -> Option<Side> {
    Side::iter().find(|&side| score.side(side).sets() == MATCH_SETS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SideScore;

    #[test]
    fn test_two_sets_wins() {
        let score = Score::from_sides(SideScore::new(0, 0, 1), SideScore::new(0, 0, 2));
        assert_eq!(match_winner(&score), Some(Side::Two));
    }

    #[test]
    fn test_one_set_each_is_undecided() {
        let score = Score::from_sides(SideScore::new(0, 3, 1), SideScore::new(0, 2, 1));
        assert_eq!(match_winner(&score), None);
    }
}
