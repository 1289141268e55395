use thiserror::Error;

/// Errors of the candidate store contract.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No aggregate exists under the given key.
    #[error("no candidate found for key '{key}'")]
    NotFound { key: String },

    /// A read could not be completed.
    #[error("store read failed: {reason}")]
    ReadFailed { reason: String },

    /// A write could not be completed.
    #[error("store write failed: {reason}")]
    WriteFailed { reason: String },
}
