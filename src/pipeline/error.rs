use thiserror::Error;

use crate::persist::PersistError;

use super::types::ErrorBody;

/// Failures an evaluation surfaces to its caller.
///
/// Oracle and parse failures never appear here; they degrade to the
/// deterministic scoring path inside the pipeline.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The request was rejected before any invocation.
    #[error("invalid evaluation request: {reason}")]
    Validation { reason: String },

    /// The identifying key matched no candidate.
    #[error("no candidate found for key '{key}'")]
    CandidateNotFound { key: String },

    /// Both save paths failed, or the aggregate could not be loaded.
    #[error(transparent)]
    Persistence(PersistError),
}

impl EvalError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::Validation { .. } => "validation",
            EvalError::CandidateNotFound { .. } => "not_found",
            EvalError::Persistence(_) => "persistence",
        }
    }

    /// Returns `true` for client-side errors.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EvalError::Validation { .. } | EvalError::CandidateNotFound { .. }
        )
    }

    /// Converts into the caller-facing wire shape. Internals are included
    /// only when `diagnostics` is set.
    pub fn to_wire(&self, diagnostics: bool) -> ErrorBody {
        ErrorBody {
            kind: self.kind().to_string(),
            message: self.to_string(),
            detail: diagnostics.then(|| format!("{self:?}")),
        }
    }
}

impl From<PersistError> for EvalError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::CandidateNotFound { key } => EvalError::CandidateNotFound { key },
            PersistError::QuestionIndexOutOfRange { index, count } => EvalError::Validation {
                reason: format!("question index {index} out of range for {count} questions"),
            },
            other => EvalError::Persistence(other),
        }
    }
}
