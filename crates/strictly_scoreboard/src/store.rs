//! In-memory match storage.
//!
//! Matches are kept in their storage shape ([`MatchRecord`]). Each record
//! sits behind its own async mutex so that two point submissions for the
//! same match are applied one after the other, while different matches
//! never wait on each other.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use strictly_tennis::{MatchId, MatchRecord};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Storage error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StoreError {
    /// No match is stored under the identifier.
    #[display("Match not found: {}", _0)]
    NotFound(MatchId),
    /// A match is already stored under the identifier.
    #[display("Match already exists: {}", _0)]
    AlreadyExists(MatchId),
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
struct Slot {
    created: u64,
    record: Arc<Mutex<MatchRecord>>,
}

/// Shared, cloneable store of match records.
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    slots: Arc<RwLock<HashMap<MatchId, Slot>>>,
    sequence: Arc<AtomicU64>,
}

impl MatchStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating match store");
        Self::default()
    }

    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the identifier is taken.
    #[instrument(skip(self, record), fields(match_id = %record.uuid()))]
    pub fn insert(&self, record: MatchRecord) -> Result<(), StoreError> {
        let id = *record.uuid();
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if slots.contains_key(&id) {
            warn!("Match already exists");
            return Err(StoreError::AlreadyExists(id));
        }
        let created = self.sequence.fetch_add(1, Ordering::Relaxed);
        slots.insert(
            id,
            Slot {
                created,
                record: Arc::new(Mutex::new(record)),
            },
        );
        debug!(created, "Match stored");
        Ok(())
    }

    /// Returns a snapshot of the record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier.
    #[instrument(skip(self))]
    pub async fn load(&self, id: MatchId) -> Result<MatchRecord, StoreError> {
        let record = self.slot(id)?;
        let snapshot = record.lock().await.clone();
        Ok(snapshot)
    }

    /// Runs `update` against the stored record while holding that match's lock.
    ///
    /// Updates to the same match are serialized; the closure decides whether
    /// to modify the record and what to return.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier; the
    /// closure's own error type is passed through inside `Ok`.
    #[instrument(skip(self, update))]
    pub async fn update<T>(
        &self,
        id: MatchId,
        update: impl FnOnce(&mut MatchRecord) -> T,
    ) -> Result<T, StoreError> {
        let record = self.slot(id)?;
        let mut guard = record.lock().await;
        let result = update(&mut *guard);
        debug!("Match updated");
        Ok(result)
    }

    /// Returns snapshots of every record, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<MatchRecord> {
        let mut slots: Vec<(u64, Arc<Mutex<MatchRecord>>)> = {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            slots
                .values()
                .map(|slot| (slot.created, Arc::clone(&slot.record)))
                .collect()
        };
        slots.sort_by_key(|(created, _)| *created);

        let mut records = Vec::with_capacity(slots.len());
        for (_, record) in slots {
            records.push(record.lock().await.clone());
        }
        debug!(count = records.len(), "Listed matches");
        records
    }

    /// Number of stored matches.
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: MatchId) -> Result<Arc<Mutex<MatchRecord>>, StoreError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&id)
            .map(|slot| Arc::clone(&slot.record))
            .ok_or_else(|| {
                debug!(match_id = %id, "Match not found");
                StoreError::NotFound(id)
            })
    }
}
