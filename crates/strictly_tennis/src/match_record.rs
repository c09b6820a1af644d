//! Storage representation of a match.
//!
//! Stores keep the score as a JSON string and the game state as a tag, so a
//! record can be corrupt in ways a [`Match`] cannot. Converting a record
//! back into a match is where those problems surface.

use crate::{GameState, Match, MatchId, Score, ScoringError, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};

/// A match as it sits in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchRecord {
    /// Match identifier.
    uuid: MatchId,
    /// Name of player 1.
    player_one: String,
    /// Name of player 2.
    player_two: String,
    /// Score serialized as JSON.
    score: String,
    /// Game state tag.
    current_game_state: String,
}

impl MatchRecord {
    /// Creates a record from raw stored columns.
    pub fn new(
        uuid: MatchId,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        score: impl Into<String>,
        current_game_state: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            player_one: player_one.into(),
            player_two: player_two.into(),
            score: score.into(),
            current_game_state: current_game_state.into(),
        }
    }

    /// Parses the record, scores a point for player 1 or 2, and writes the
    /// result back.
    ///
    /// The record is only overwritten on success.
    ///
    /// # Errors
    ///
    /// - [`ScoringError::InvalidPlayerNumber`] for a player other than 1 or 2
    /// - [`ScoringError::UnknownGameState`] / [`ScoringError::InvalidScoreData`]
    ///   for a corrupt record
    /// - any error from [`Match::add_point`]
    #[instrument(skip(self), fields(match_id = %self.uuid))]
    pub fn add_point(&mut self, player_number: u8) -> Result<(), ScoringError> {
        let side = Side::try_from(player_number)?;
        let mut tennis_match = Match::try_from(&*self)?;
        tennis_match.add_point(side)?;
        *self = MatchRecord::from(&tennis_match);
        Ok(())
    }
}

impl TryFrom<&MatchRecord> for Match {
    type Error = ScoringError;

    fn try_from(record: &MatchRecord) -> Result<Self, Self::Error> {
        let state: GameState = record.current_game_state.parse().inspect_err(|_| {
            warn!(
                match_id = %record.uuid,
                tag = %record.current_game_state,
                "Unknown game state in record"
            );
        })?;
        let score: Score = serde_json::from_str(&record.score).map_err(|e| {
            warn!(match_id = %record.uuid, error = %e, "Corrupt score in record");
            ScoringError::InvalidScoreData(e.to_string())
        })?;
        Ok(Match::restore(
            record.uuid,
            &record.player_one,
            &record.player_two,
            score,
            state,
        ))
    }
}

impl TryFrom<MatchRecord> for Match {
    type Error = ScoringError;

    fn try_from(record: MatchRecord) -> Result<Self, Self::Error> {
        Match::try_from(&record)
    }
}

impl From<&Match> for MatchRecord {
    fn from(tennis_match: &Match) -> Self {
        Self {
            uuid: *tennis_match.id(),
            player_one: tennis_match.player_one().clone(),
            player_two: tennis_match.player_two().clone(),
            score: score_json(tennis_match),
            current_game_state: tennis_match.state().tag().to_string(),
        }
    }
}

/// Serializes the score. A [`Score`] is plain integers and an optional side,
/// so the error branch only logs.
fn score_json(tennis_match: &Match) -> String {
    serde_json::to_string(tennis_match.score()).unwrap_or_else(|e| {
        error!(match_id = %tennis_match.id(), error = %e, "Failed to serialize score");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRESH_SCORE: &str = r#"{"player1": {"sets": 0, "games": 0, "points": 0},
                                  "player2": {"sets": 0, "games": 0, "points": 0}}"#;

    #[test]
    fn test_record_from_fresh_match() {
        let tennis_match = Match::new("Ann", "Bea");
        let record = MatchRecord::from(&tennis_match);
        assert_eq!(record.current_game_state(), "regular");
        assert_eq!(Match::try_from(&record).unwrap(), tennis_match);
    }

    #[test]
    fn test_record_score_is_parseable_json() {
        let mut tennis_match = Match::new("Ann", "Bea");
        tennis_match.add_point(Side::Two).unwrap();
        let record = MatchRecord::from(&tennis_match);

        let score: Score = serde_json::from_str(record.score()).unwrap();
        assert_eq!(&score, tennis_match.score());
        assert!(!record.score().is_empty());
    }

    #[test]
    fn test_add_point_writes_back() {
        let mut record = MatchRecord::new(MatchId::new(), "Ann", "Bea", FRESH_SCORE, "regular");
        record.add_point(2).unwrap();

        let tennis_match = Match::try_from(&record).unwrap();
        assert_eq!(tennis_match.score().side(Side::Two).points(), 1);
    }

    #[test]
    fn test_unknown_state_surfaces() {
        let mut record =
            MatchRecord::new(MatchId::new(), "Ann", "Bea", FRESH_SCORE, "sudden_death");
        let original = record.clone();
        assert_eq!(
            record.add_point(1),
            Err(ScoringError::UnknownGameState("sudden_death".to_string()))
        );
        assert_eq!(record, original);
    }

    #[test]
    fn test_corrupt_score_surfaces() {
        let mut record = MatchRecord::new(MatchId::new(), "Ann", "Bea", "{\"player1\":", "regular");
        assert!(matches!(
            record.add_point(1),
            Err(ScoringError::InvalidScoreData(_))
        ));
    }

    #[test]
    fn test_invalid_player_number() {
        let mut record = MatchRecord::new(MatchId::new(), "Ann", "Bea", FRESH_SCORE, "regular");
        assert_eq!(record.add_point(3), Err(ScoringError::InvalidPlayerNumber(3)));
    }
}
