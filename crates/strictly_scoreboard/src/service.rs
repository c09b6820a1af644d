//! Match service: the operations behind the HTTP routes.

use crate::config::ServerConfig;
use crate::store::{MatchStore, StoreError};
use crate::validation::{self, NameErrors};
use derive_getters::Getters;
use serde::Serialize;
use strictly_tennis::{Match, MatchId, MatchRecord, ScoringError};
use tracing::{debug, info, instrument, warn};

/// Service-level error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ServiceError {
    /// Storage lookup failed.
    #[display("{}", _0)]
    Store(StoreError),
    /// Scoring or restoring the match failed.
    #[display("{}", _0)]
    Scoring(ScoringError),
    /// Player names were rejected.
    #[display("{}", _0)]
    InvalidNames(NameErrors),
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Store(e) => Some(e),
            ServiceError::Scoring(e) => Some(e),
            ServiceError::InvalidNames(e) => Some(e),
        }
    }
}

/// One row of the completed matches listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct CompletedMatch {
    id: MatchId,
    player_one: String,
    player_two: String,
    winner: String,
}

/// A page of completed matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct CompletedPage {
    matches: Vec<CompletedMatch>,
    current_page: usize,
    total_pages: usize,
    player_name: Option<String>,
}

/// Creates, scores and lists matches.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct MatchService {
    store: MatchStore,
    config: ServerConfig,
}

impl MatchService {
    /// Validates the names and stores a fresh match.
    #[instrument(skip(self))]
    pub fn create_match(&self, player_one: &str, player_two: &str) -> Result<Match, ServiceError> {
        let (one, two) =
            validation::player_names(player_one, player_two, *self.config.max_name_length())?;
        let tennis_match = Match::new(one, two);
        self.store.insert(MatchRecord::from(&tennis_match))?;
        info!(match_id = %tennis_match.id(), "Match created");
        Ok(tennis_match)
    }

    /// Loads a match.
    #[instrument(skip(self))]
    pub async fn get_match(&self, id: MatchId) -> Result<Match, ServiceError> {
        let record = self.store.load(id).await?;
        Ok(Match::try_from(record)?)
    }

    /// Scores a point for player `player_number` (1 or 2) and returns the updated match.
    ///
    /// Points for the same match are applied one at a time. A rejected point
    /// leaves the stored record untouched.
    #[instrument(skip(self))]
    pub async fn add_point(&self, id: MatchId, player_number: u8) -> Result<Match, ServiceError> {
        let record = self
            .store
            .update(id, |record| record.add_point(player_number).map(|()| record.clone()))
            .await??;
        let tennis_match = Match::try_from(record)?;
        debug!(
            state = %tennis_match.state(),
            finished = tennis_match.is_finished(),
            "Point recorded"
        );
        Ok(tennis_match)
    }

    /// Lists completed matches, newest last, optionally filtered by a
    /// case-insensitive fragment of either player's name.
    ///
    /// Out-of-range page numbers are clamped.
    #[instrument(skip(self))]
    pub async fn completed_matches(&self, page: usize, player_name: Option<&str>) -> CompletedPage {
        let filter = player_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let needle = filter.as_deref().map(str::to_lowercase);

        let completed: Vec<CompletedMatch> = self
            .store
            .list()
            .await
            .into_iter()
            .filter_map(|record| match Match::try_from(&record) {
                Ok(tennis_match) => Some(tennis_match),
                Err(e) => {
                    warn!(match_id = %record.uuid(), error = %e, "Skipping unreadable match");
                    None
                }
            })
            .filter(|tennis_match| {
                needle.as_deref().is_none_or(|needle| {
                    tennis_match.player_one().to_lowercase().contains(needle)
                        || tennis_match.player_two().to_lowercase().contains(needle)
                })
            })
            .filter_map(|tennis_match| {
                let winner = tennis_match.winner_name()?.to_string();
                Some(CompletedMatch::new(
                    *tennis_match.id(),
                    tennis_match.player_one().clone(),
                    tennis_match.player_two().clone(),
                    winner,
                ))
            })
            .collect();

        let per_page = *self.config.per_page();
        let total_pages = validation::total_pages(completed.len(), per_page);
        let current_page = validation::correct_page(page, completed.len(), per_page);
        let matches = completed
            .into_iter()
            .skip((current_page - 1) * per_page)
            .take(per_page)
            .collect();

        CompletedPage::new(matches, current_page, total_pages, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MatchService {
        MatchService::new(MatchStore::new(), ServerConfig::default())
    }

    #[tokio::test]
    async fn test_create_and_score() {
        let service = service();
        let created = service.create_match(" Ann ", "Bea").unwrap();
        assert_eq!(created.player_one(), "Ann");

        let scored = service.add_point(*created.id(), 1).await.unwrap();
        assert_eq!(scored.score().side(strictly_tennis::Side::One).points(), 1);
        assert_eq!(service.get_match(*created.id()).await.unwrap(), scored);
    }

    #[tokio::test]
    async fn test_rejected_names_store_nothing() {
        let service = service();
        let result = service.create_match("Ann", "ann");
        assert!(matches!(result, Err(ServiceError::InvalidNames(_))));
        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_player_number_leaves_match_unchanged() {
        let service = service();
        let created = service.create_match("Ann", "Bea").unwrap();

        let result = service.add_point(*created.id(), 3).await;
        assert_eq!(
            result,
            Err(ServiceError::Scoring(ScoringError::InvalidPlayerNumber(3)))
        );
        assert_eq!(service.get_match(*created.id()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_unknown_match() {
        let service = service();
        let id = MatchId::new();
        assert_eq!(
            service.get_match(id).await,
            Err(ServiceError::Store(StoreError::NotFound(id)))
        );
    }
}
