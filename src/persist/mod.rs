//! Durable commit of canonical score records.
//!
//! The coordinator owns the write side of an evaluation: pad the aggregate's
//! index-aligned sequences, overwrite the target index, recompute the
//! completion rule, then save — whole-aggregate first, targeted replace as
//! the last-resort retry of the same write. Verification after a successful
//! save is best-effort: a mismatch is logged and never escalated.
//!
//! Writes for the same candidate key are serialized through a per-key async
//! mutex, so two concurrent evaluations against different question indices
//! cannot silently drop each other's updates.

pub mod error;


pub use error::PersistError;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::canonical::CanonicalScoreRecord;
use crate::store::{CandidateStatus, CandidateStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a committed evaluation did to the candidate's progress.
pub struct CommitOutcome {
    /// `true` once the completion rule has fired.
    pub is_completed: bool,
    /// Completion timestamp, when set.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Coordinates loading, mutation and saving of candidate aggregates.
pub struct PersistenceCoordinator<S> {
    store: S,
    write_locks: WriteLockRegistry,
}

impl<S: CandidateStore> PersistenceCoordinator<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_locks: WriteLockRegistry::default(),
        }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes `record` (and the answer text) at `question_index`, padding
    /// the sequences as needed, and recomputes the completion rule.
    pub async fn commit(
        &self,
        key: &str,
        question_index: usize,
        answer_text: &str,
        record: CanonicalScoreRecord,
    ) -> Result<CommitOutcome, PersistError> {
        let key_lock = self.write_locks.lock_for(key);
        let _serialized = key_lock.lock().await;

        let mut aggregate = self.store.load_by_key(key).await.map_err(|err| match err {
            StoreError::NotFound { key } => PersistError::CandidateNotFound { key },
            other => PersistError::LoadFailed { source: other },
        })?;

        let question_count = aggregate.questions.len();
        if question_index >= question_count {
            return Err(PersistError::QuestionIndexOutOfRange {
                index: question_index,
                count: question_count,
            });
        }

        // Right-pad, never truncate: scores[i] and answers[i] must exist for
        // every touched index.
        while aggregate.answers.len() <= question_index {
            aggregate.answers.push(String::new());
        }
        while aggregate.scores.len() <= question_index {
            aggregate.scores.push(CanonicalScoreRecord::placeholder());
        }

        aggregate.answers[question_index] = answer_text.to_string();
        aggregate.scores[question_index] = record.clone();

        if aggregate.status != CandidateStatus::Completed && aggregate.answered_all() {
            aggregate.status = CandidateStatus::Completed;
            aggregate.completed_at = Some(Utc::now());
            info!(candidate = %key, "All questions answered, marking candidate completed");
        }

        if let Err(primary) = self.store.save(&aggregate).await {
            warn!(
                candidate = %key,
                error = %primary,
                "Primary save failed, retrying with targeted replace"
            );

            if let Err(secondary) = self
                .store
                .replace_evaluation(aggregate.id, &aggregate.answers, &aggregate.scores)
                .await
            {
                return Err(PersistError::SaveFailed { primary, secondary });
            }
        }

        self.verify_write(key, question_index, &record).await;

        Ok(CommitOutcome {
            is_completed: aggregate.is_completed(),
            completed_at: aggregate.completed_at,
        })
    }

    /// Best-effort read-back check of the entry just written. Never blocks
    /// or fails the commit.
    async fn verify_write(&self, key: &str, question_index: usize, expected: &CanonicalScoreRecord) {
        match self.store.load_by_key(key).await {
            Ok(aggregate) => match aggregate.scores.get(question_index) {
                Some(written) if written == expected => {
                    debug!(candidate = %key, question_index, "Write verified");
                }
                Some(_) => {
                    warn!(
                        candidate = %key,
                        question_index,
                        "Verification mismatch: stored score differs from written score"
                    );
                }
                None => {
                    warn!(
                        candidate = %key,
                        question_index,
                        "Verification mismatch: stored score entry is missing"
                    );
                }
            },
            Err(err) => {
                warn!(candidate = %key, error = %err, "Verification read failed");
            }
        }
    }
}

/// Per-candidate-key async mutexes handed out for write serialization.
#[derive(Debug, Default)]
struct WriteLockRegistry {
    locks: parking_lot::Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl WriteLockRegistry {
    fn lock_for(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        self.locks
            .lock()
            .entry(key.to_string())
            .or_default()
            .clone()
    }
}
