//! Game state: the tag that selects how the next point is scored.

use crate::{ScoringError, Side};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// State of the current game within the match.
///
/// Persisted as a short tag (`regular`, `deuce`, `advantage_1`,
/// `advantage_2`, `tie_break`, `finished`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameState {
    /// Ordinary game scoring (0, 15, 30, 40).
    #[default]
    Regular,
    /// Both sides on 40 or level beyond it.
    Deuce,
    /// The given side leads by one point after deuce.
    Advantage(Side),
    /// Tie-break game at 6-6.
    TieBreak,
    /// Match decided; no more points accepted.
    Finished,
}

impl GameState {
    /// Returns true once the match has a winner.
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Finished)
    }

    /// Persisted tag for this state.
    pub fn tag(self) -> &'static str {
        match self {
            GameState::Regular => "regular",
            GameState::Deuce => "deuce",
            GameState::Advantage(Side::One) => "advantage_1",
            GameState::Advantage(Side::Two) => "advantage_2",
            GameState::TieBreak => "tie_break",
            GameState::Finished => "finished",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GameState {
    type Err = ScoringError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "regular" => Ok(GameState::Regular),
            "deuce" => Ok(GameState::Deuce),
            "tie_break" => Ok(GameState::TieBreak),
            "finished" => Ok(GameState::Finished),
            _ => tag
                .strip_prefix("advantage_")
                .and_then(|n| n.parse::<u8>().ok())
                .and_then(|n| Side::try_from(n).ok())
                .map(GameState::Advantage)
                .ok_or_else(|| ScoringError::UnknownGameState(tag.to_string())),
        }
    }
}

impl TryFrom<String> for GameState {
    type Error = ScoringError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.tag().to_string()
    }
}
