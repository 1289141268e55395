use thiserror::Error;

use crate::store::StoreError;

/// Errors of the persistence coordinator.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The identifying key matched no candidate.
    #[error("no candidate found for key '{key}'")]
    CandidateNotFound { key: String },

    /// The target index lies outside the interview's question list.
    #[error("question index {index} out of range for {count} questions")]
    QuestionIndexOutOfRange { index: usize, count: usize },

    /// The aggregate could not be loaded.
    #[error("failed to load candidate: {source}")]
    LoadFailed {
        #[source]
        source: StoreError,
    },

    /// Both the primary and the secondary save path failed. Fatal.
    #[error("both save paths failed: primary: {primary}; secondary: {secondary}")]
    SaveFailed {
        primary: StoreError,
        secondary: StoreError,
    },
}
