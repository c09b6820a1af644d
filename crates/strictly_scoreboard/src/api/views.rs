//! Request and response bodies.

use serde::{Deserialize, Serialize};
use strictly_tennis::{GameState, Match, MatchId, PointCall, Side};

/// Body of `POST /matches`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchRequest {
    /// Name of player 1.
    pub player_one: String,
    /// Name of player 2.
    pub player_two: String,
}

/// Query of `GET /matches`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMatchesParams {
    /// Requested page, 1-based.
    pub page: Option<usize>,
    /// Case-insensitive fragment of either player's name.
    pub filter_by_player_name: Option<String>,
}

/// One player's line on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideView {
    /// Player name.
    pub name: String,
    /// Sets won.
    pub sets: u32,
    /// Games in the current set.
    pub games: u32,
    /// Raw points in the current game.
    pub points: u32,
    /// Points as called by the umpire.
    pub call: PointCall,
}

/// A match as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// Match identifier.
    pub id: MatchId,
    /// Player 1.
    pub player_one: SideView,
    /// Player 2.
    pub player_two: SideView,
    /// Game state tag.
    pub state: GameState,
    /// Winner's name once the match is over.
    pub winner: Option<String>,
    /// True once the match is over.
    pub finished: bool,
}

impl From<&Match> for MatchView {
    fn from(tennis_match: &Match) -> Self {
        let side_view = |side: Side| {
            let score = tennis_match.score().side(side);
            SideView {
                name: tennis_match.player_name(side).to_string(),
                sets: score.sets(),
                games: score.games(),
                points: score.points(),
                call: PointCall::for_side(tennis_match.score(), *tennis_match.state(), side),
            }
        };

        Self {
            id: *tennis_match.id(),
            player_one: side_view(Side::One),
            player_two: side_view(Side::Two),
            state: *tennis_match.state(),
            winner: tennis_match.winner_name().map(str::to_string),
            finished: tennis_match.is_finished(),
        }
    }
}
