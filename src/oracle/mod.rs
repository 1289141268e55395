//! The generative-text oracle and its bounded-retry invoker.
//!
//! The oracle is an opaque, unreliable text-completion function. Everything
//! that can go wrong with it is absorbed here or routed to the
//! deterministic scorer by the pipeline; no oracle failure ever reaches an
//! evaluation's caller.

pub mod backoff;
pub mod client;
pub mod error;
pub mod invoker;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use backoff::{Sleeper, TokioSleeper};
#[cfg(any(test, feature = "mock"))]
pub use backoff::RecordingSleeper;
pub use client::GenAiOracle;
pub use error::OracleError;
pub use invoker::{ModelInvoker, OracleAnswers};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockOracle;

/// Contract of the external generative-text service.
pub trait TextOracle: Send + Sync {
    /// Completes `prompt`, returning the model's raw text.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, OracleError>> + Send;
}
