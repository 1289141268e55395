use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::canonical::CanonicalScoreRecord;

use super::CandidateStore;
use super::error::StoreError;
use super::memory::InMemoryCandidateStore;
use super::model::CandidateAggregate;

/// In-memory store with failure injection for exercising the error paths.
///
/// Failures are armed as "fail the next N calls" counters; once drained the
/// store behaves normally again.
#[derive(Debug, Default, Clone)]
pub struct MockCandidateStore {
    inner: InMemoryCandidateStore,
    load_plan: Arc<Mutex<LoadPlan>>,
    failing_saves: Arc<Mutex<u32>>,
    failing_replaces: Arc<Mutex<u32>>,
    tamper_loads: Arc<Mutex<bool>>,
}

#[derive(Debug, Default)]
struct LoadPlan {
    skip: u32,
    fail: u32,
}

impl MockCandidateStore {
    /// Creates an empty store with no armed failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) an aggregate under its email key.
    pub fn insert(&self, aggregate: CandidateAggregate) {
        self.inner.insert(aggregate);
    }

    /// Snapshot of the aggregate stored under `key`.
    pub fn get(&self, key: &str) -> Option<CandidateAggregate> {
        self.inner.get(key)
    }

    /// Arms the next `count` loads to fail.
    pub fn fail_next_loads(&self, count: u32) {
        *self.load_plan.lock() = LoadPlan {
            skip: 0,
            fail: count,
        };
    }

    /// Lets the next `successes` loads through, then fails `count` of them.
    pub fn fail_loads_after(&self, successes: u32, count: u32) {
        *self.load_plan.lock() = LoadPlan {
            skip: successes,
            fail: count,
        };
    }

    /// Arms the next `count` whole-aggregate saves to fail.
    pub fn fail_next_saves(&self, count: u32) {
        *self.failing_saves.lock() = count;
    }

    /// Arms the next `count` targeted replaces to fail.
    pub fn fail_next_replaces(&self, count: u32) {
        *self.failing_replaces.lock() = count;
    }

    /// When set, loads return the aggregate with every score blanked to the
    /// placeholder, simulating a stale read-after-write view.
    pub fn tamper_loads(&self, tamper: bool) {
        *self.tamper_loads.lock() = tamper;
    }

    fn consume(counter: &Mutex<u32>) -> bool {
        let mut remaining = counter.lock();
        if *remaining > 0 {
            *remaining -= 1;
            true
        } else {
            false
        }
    }

    fn next_load_fails(&self) -> bool {
        let mut plan = self.load_plan.lock();
        if plan.skip > 0 {
            plan.skip -= 1;
            return false;
        }
        if plan.fail > 0 {
            plan.fail -= 1;
            return true;
        }
        false
    }
}

impl CandidateStore for MockCandidateStore {
    async fn load_by_key(&self, key: &str) -> Result<CandidateAggregate, StoreError> {
        if self.next_load_fails() {
            return Err(StoreError::ReadFailed {
                reason: "injected load failure".to_string(),
            });
        }

        let mut aggregate = self.inner.load_by_key(key).await?;
        if *self.tamper_loads.lock() {
            for score in &mut aggregate.scores {
                *score = CanonicalScoreRecord::placeholder();
            }
        }

        Ok(aggregate)
    }

    async fn save(&self, aggregate: &CandidateAggregate) -> Result<(), StoreError> {
        if Self::consume(&self.failing_saves) {
            return Err(StoreError::WriteFailed {
                reason: "injected save failure".to_string(),
            });
        }

        self.inner.save(aggregate).await
    }

    async fn replace_evaluation(
        &self,
        id: Uuid,
        answers: &[String],
        scores: &[CanonicalScoreRecord],
    ) -> Result<(), StoreError> {
        if Self::consume(&self.failing_replaces) {
            return Err(StoreError::WriteFailed {
                reason: "injected replace failure".to_string(),
            });
        }

        self.inner.replace_evaluation(id, answers, scores).await
    }
}
