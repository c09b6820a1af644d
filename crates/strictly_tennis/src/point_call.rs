//! Umpire calls for the points column of a scoreboard.

use crate::{GameState, Score, Side};
use serde::{Serialize, Serializer};

/// How a side's points are called out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointCall {
    /// 0 points.
    Love,
    /// 1 point.
    Fifteen,
    /// 2 points.
    Thirty,
    /// 3 points, or level at deuce.
    Forty,
    /// Holds the advantage.
    Advantage,
    /// Raw point count during a tie-break.
    TieBreak(u32),
}

impl PointCall {
    /// Returns the call for `side` given the score and game state.
    pub fn for_side(score: &Score, state: GameState, side: Side) -> Self {
        let points = score.side(side).points();
        match state {
            GameState::TieBreak => PointCall::TieBreak(points),
            GameState::Advantage(holder) if holder == side => PointCall::Advantage,
            GameState::Advantage(_) | GameState::Deuce => PointCall::Forty,
            GameState::Regular | GameState::Finished => match points {
                0 => PointCall::Love,
                1 => PointCall::Fifteen,
                2 => PointCall::Thirty,
                _ => PointCall::Forty,
            },
        }
    }
}

impl std::fmt::Display for PointCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointCall::Love => f.write_str("0"),
            PointCall::Fifteen => f.write_str("15"),
            PointCall::Thirty => f.write_str("30"),
            PointCall::Forty => f.write_str("40"),
            PointCall::Advantage => f.write_str("AD"),
            PointCall::TieBreak(points) => write!(f, "{}", points),
        }
    }
}

impl Serialize for PointCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
