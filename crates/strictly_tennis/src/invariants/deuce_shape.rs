//! Deuce invariant: deuce and advantage have a fixed point shape.

use super::Invariant;
use crate::rules::GAME_POINT_THRESHOLD;
use crate::{GameState, Match, Side};

/// Invariant: `Deuce` means level on at least 40-40; `Advantage(s)` means
/// `s` leads by exactly one point beyond 40-40.
pub struct DeuceShapeInvariant;

impl Invariant<Match> for DeuceShapeInvariant {
    fn holds(tennis_match: &Match) -> bool {
        let score = tennis_match.score();
        match *tennis_match.state() {
            GameState::Deuce => {
                let one = score.side(Side::One).points();
                one >= GAME_POINT_THRESHOLD && one == score.side(Side::Two).points()
            }
            GameState::Advantage(holder) => {
                let trailing = score.side(holder.opponent()).points();
                trailing >= GAME_POINT_THRESHOLD
                    && score.side(holder).points() == trailing + 1
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Deuce is level from 40-40 and advantage leads by exactly one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchId, Score, SideScore};

    fn with_points(one: u32, two: u32, state: GameState) -> Match {
        let score = Score::from_sides(SideScore::new(one, 0, 0), SideScore::new(two, 0, 0));
        Match::restore(MatchId::new(), "Ann", "Bea", score, state)
    }

    #[test]
    fn test_deuce_shapes() {
        assert!(DeuceShapeInvariant::holds(&with_points(3, 3, GameState::Deuce)));
        assert!(DeuceShapeInvariant::holds(&with_points(6, 6, GameState::Deuce)));
        assert!(!DeuceShapeInvariant::holds(&with_points(2, 2, GameState::Deuce)));
        assert!(!DeuceShapeInvariant::holds(&with_points(4, 3, GameState::Deuce)));
    }

    #[test]
    fn test_advantage_shapes() {
        let adv_two = GameState::Advantage(Side::Two);
        assert!(DeuceShapeInvariant::holds(&with_points(3, 4, adv_two)));
        assert!(!DeuceShapeInvariant::holds(&with_points(4, 3, adv_two)));
        assert!(!DeuceShapeInvariant::holds(&with_points(1, 2, adv_two)));
    }
}
