use thiserror::Error;

/// Failures of the generative-text oracle.
///
/// Neither variant is ever surfaced to the caller of an evaluation; both
/// route the pipeline onto the deterministic scoring path.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle was unreachable or kept erroring after retries.
    #[error("model unavailable: {reason}")]
    Unavailable { reason: String },

    /// No credential is configured; invocation was skipped entirely.
    #[error("no oracle credential configured ({variable} is not set)")]
    ConfigMissing { variable: String },
}
