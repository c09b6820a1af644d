//! The match entity: identity, players, score and game state.

use crate::{GameState, MatchId, Point, Score, ScoringError, Side, engine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A singles match.
///
/// Owns exactly one [`Score`] and one [`GameState`]. The score only changes
/// through [`Match::add_point`], and is frozen once the state is
/// [`GameState::Finished`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Match {
    /// Identifier used for external lookup.
    id: MatchId,
    /// Name of player 1.
    player_one: String,
    /// Name of player 2.
    player_two: String,
    /// Current score.
    score: Score,
    /// Current game state.
    state: GameState,
}

impl Match {
    /// Creates a new match with a fresh identifier, zero score and `Regular` state.
    #[instrument(skip_all)]
    pub fn new(player_one: impl AsRef<str>, player_two: impl AsRef<str>) -> Self {
        let tennis_match = Self::with_id(MatchId::new(), player_one, player_two);
        info!(
            match_id = %tennis_match.id,
            player_one = %tennis_match.player_one,
            player_two = %tennis_match.player_two,
            "Match created"
        );
        tennis_match
    }

    /// Creates a new match under a known identifier.
    pub fn with_id(id: MatchId, player_one: impl AsRef<str>, player_two: impl AsRef<str>) -> Self {
        Self::restore(
            id,
            player_one,
            player_two,
            Score::new(),
            GameState::Regular,
        )
    }

    /// Rebuilds a match from previously stored parts.
    ///
    /// No validation happens here; the next [`Match::add_point`] checks the
    /// match invariants as a postcondition.
    pub fn restore(
        id: MatchId,
        player_one: impl AsRef<str>,
        player_two: impl AsRef<str>,
        score: Score,
        state: GameState,
    ) -> Self {
        Self {
            id,
            player_one: player_one.as_ref().to_string(),
            player_two: player_two.as_ref().to_string(),
            score,
            state,
        }
    }

    /// Replays a point history from a fresh match.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScoringError`] raised while applying the points,
    /// e.g. [`ScoringError::MatchFinished`] if the history runs past the end
    /// of the match.
    #[instrument(skip_all, fields(points = points.len()))]
    pub fn replay(
        player_one: impl AsRef<str>,
        player_two: impl AsRef<str>,
        points: &[Point],
    ) -> Result<Self, ScoringError> {
        let mut tennis_match = Self::with_id(MatchId::new(), player_one, player_two);
        for point in points {
            tennis_match.add_point(point.side())?;
        }
        Ok(tennis_match)
    }

    /// Scores a point for `side`. See [`engine::add_point`].
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::MatchFinished`] once the match is decided, or
    /// [`ScoringError::InvariantViolation`] if the stored state was corrupt.
    pub fn add_point(&mut self, side: Side) -> Result<(), ScoringError> {
        engine::add_point(self, side)
    }

    /// Scores a point for player number 1 or 2.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidPlayerNumber`] for any other number,
    /// plus the errors of [`Match::add_point`].
    pub fn add_point_for_player(&mut self, player_number: u8) -> Result<(), ScoringError> {
        let side = Side::try_from(player_number)?;
        self.add_point(side)
    }

    /// Returns the name of the player on `side`.
    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::One => &self.player_one,
            Side::Two => &self.player_two,
        }
    }

    /// Returns the winning side, if the match is decided.
    pub fn winner(&self) -> Option<Side> {
        self.score.winner()
    }

    /// Returns the winner's name, if the match is decided.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(|side| self.player_name(side))
    }

    /// Returns true once the match has a winner.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Gives the engine simultaneous access to the score and the state.
    pub(crate) fn parts_mut(&mut self) -> (&mut Score, &mut GameState) {
        (&mut self.score, &mut self.state)
    }
}
