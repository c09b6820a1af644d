//! Score record: points, games and sets for both sides.

use crate::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Running totals for one side of the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideScore {
    sets: u32,
    games: u32,
    points: u32,
}

impl SideScore {
    /// Creates a side score from explicit totals.
    pub fn new(points: u32, games: u32, sets: u32) -> Self {
        Self {
            sets,
            games,
            points,
        }
    }

    /// Points in the current game (or tie-break).
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Games in the current set.
    pub fn games(&self) -> u32 {
        self.games
    }

    /// Sets won so far.
    pub fn sets(&self) -> u32 {
        self.sets
    }

    /// Overwrites the point count.
    pub fn set_points(&mut self, points: u32) {
        self.points = points;
    }

    /// Overwrites the game count.
    pub fn set_games(&mut self, games: u32) {
        self.games = games;
    }

    /// Overwrites the set count.
    pub fn set_sets(&mut self, sets: u32) {
        self.sets = sets;
    }
}

/// Complete score of a match.
///
/// Persisted as `{"player1": {..}, "player2": {..}}`; the winner is only
/// written once a side has taken the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "player1")]
    one: SideScore,
    #[serde(rename = "player2")]
    two: SideScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<Side>,
}

impl Score {
    /// Creates an all-zero score with no winner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a score from both sides' totals, with no winner.
    pub fn from_sides(one: SideScore, two: SideScore) -> Self {
        Self {
            one,
            two,
            winner: None,
        }
    }

    /// Returns the totals for a side.
    pub fn side(&self, side: Side) -> &SideScore {
        match side {
            Side::One => &self.one,
            Side::Two => &self.two,
        }
    }

    /// Returns mutable totals for a side.
    pub fn side_mut(&mut self, side: Side) -> &mut SideScore {
        match side {
            Side::One => &mut self.one,
            Side::Two => &mut self.two,
        }
    }

    /// Returns the match winner, if decided.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Marks the winner. Only the engine decides a match.
    pub(crate) fn set_winner(&mut self, side: Side) {
        self.winner = Some(side);
    }

    /// Adds one point to a side.
    pub(crate) fn add_point(&mut self, side: Side) {
        self.side_mut(side).points += 1;
    }

    /// How many points `side` leads by (zero when level or behind).
    pub fn points_lead(&self, side: Side) -> u32 {
        self.side(side)
            .points
            .saturating_sub(self.side(side.opponent()).points)
    }

    /// How many games `side` leads by (zero when level or behind).
    pub fn games_lead(&self, side: Side) -> u32 {
        self.side(side)
            .games
            .saturating_sub(self.side(side.opponent()).games)
    }

    /// Awards the current game to `side` and clears both sides' points.
    #[instrument(skip(self))]
    pub fn win_game(&mut self, side: Side) {
        self.side_mut(side).games += 1;
        self.one.points = 0;
        self.two.points = 0;
        debug!(
            games_one = self.one.games,
            games_two = self.two.games,
            "Game won"
        );
    }

    /// Awards the current set to `side` and clears both sides' games and points.
    #[instrument(skip(self))]
    pub fn win_set(&mut self, side: Side) {
        self.side_mut(side).sets += 1;
        for totals in [&mut self.one, &mut self.two] {
            totals.games = 0;
            totals.points = 0;
        }
        debug!(
            sets_one = self.one.sets,
            sets_two = self.two.sets,
            "Set won"
        );
    }
}
