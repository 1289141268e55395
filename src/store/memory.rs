use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::canonical::CanonicalScoreRecord;

use super::CandidateStore;
use super::error::StoreError;
use super::model::CandidateAggregate;

/// In-memory candidate store keyed by email.
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCandidateStore {
    records: Arc<RwLock<HashMap<String, CandidateAggregate>>>,
}

impl InMemoryCandidateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) an aggregate under its email key.
    pub fn insert(&self, aggregate: CandidateAggregate) {
        self.records
            .write()
            .insert(aggregate.email.clone(), aggregate);
    }

    /// Snapshot of the aggregate stored under `key`.
    pub fn get(&self, key: &str) -> Option<CandidateAggregate> {
        self.records.read().get(key).cloned()
    }

    /// Number of stored aggregates.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` when no aggregate is stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl CandidateStore for InMemoryCandidateStore {
    async fn load_by_key(&self, key: &str) -> Result<CandidateAggregate, StoreError> {
        self.records
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }

    async fn save(&self, aggregate: &CandidateAggregate) -> Result<(), StoreError> {
        self.records
            .write()
            .insert(aggregate.email.clone(), aggregate.clone());
        Ok(())
    }

    async fn replace_evaluation(
        &self,
        id: Uuid,
        answers: &[String],
        scores: &[CanonicalScoreRecord],
    ) -> Result<(), StoreError> {
        let mut records = self.records.write();

        let aggregate = records
            .values_mut()
            .find(|candidate| candidate.id == id)
            .ok_or_else(|| StoreError::WriteFailed {
                reason: format!("unknown aggregate id {id}"),
            })?;

        aggregate.answers = answers.to_vec();
        aggregate.scores = scores.to_vec();
        Ok(())
    }
}
