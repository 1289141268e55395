//! Candidate persistence contract and bundled implementations.
//!
//! The pipeline only ever talks to [`CandidateStore`]; the document store's
//! query and aggregation machinery stays outside this crate. The in-memory
//! implementation backs tests and embedded use; production deployments
//! provide their own implementation over the real document store.

pub mod error;
pub mod memory;
mod model;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::StoreError;
pub use memory::InMemoryCandidateStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCandidateStore;
pub use model::{CandidateAggregate, CandidateStatus, Question};

use uuid::Uuid;

use crate::canonical::CanonicalScoreRecord;

/// Load/save contract the persistence coordinator requires.
pub trait CandidateStore: Send + Sync {
    /// Loads the aggregate identified by `key` (the candidate email).
    fn load_by_key(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<CandidateAggregate, StoreError>> + Send;

    /// Persists the whole aggregate (primary save path).
    fn save(
        &self,
        aggregate: &CandidateAggregate,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Replaces only the answer/score sequences of an existing aggregate
    /// (targeted secondary save path).
    fn replace_evaluation(
        &self,
        id: Uuid,
        answers: &[String],
        scores: &[CanonicalScoreRecord],
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
