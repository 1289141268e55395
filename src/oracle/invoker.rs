use std::time::Duration;

use tracing::{debug, warn};

use super::TextOracle;
use super::backoff::{Sleeper, TokioSleeper};
use super::error::OracleError;

/// Both completions of one successful "ask the oracle" unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleAnswers {
    /// Raw text answering the scoring prompt.
    pub scoring: String,
    /// Raw text answering the improvement prompt.
    pub improvement: String,
}

/// Bounded-retry wrapper around a [`TextOracle`].
///
/// The scoring call gets up to `max_attempts` tries with linear backoff
/// (attempt `n` waits `n * base_delay`); the improvement call gets exactly
/// one. The two calls form one atomic unit: if either fails the whole unit
/// fails and the caller falls through to deterministic scoring.
#[derive(Debug, Clone)]
pub struct ModelInvoker<O, S = TokioSleeper> {
    oracle: O,
    sleeper: S,
    max_attempts: u32,
    base_delay: Duration,
}

impl<O: TextOracle> ModelInvoker<O, TokioSleeper> {
    /// Creates an invoker with the real clock.
    pub fn new(oracle: O, max_attempts: u32, base_delay: Duration) -> Self {
        Self::with_sleeper(oracle, max_attempts, base_delay, TokioSleeper)
    }
}

impl<O: TextOracle, S: Sleeper> ModelInvoker<O, S> {
    /// Creates an invoker with an explicit sleep implementation.
    pub fn with_sleeper(oracle: O, max_attempts: u32, base_delay: Duration, sleeper: S) -> Self {
        Self {
            oracle,
            sleeper,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Attempts the prompt up to the attempt budget, backing off linearly
    /// between failures.
    pub async fn invoke(&self, prompt: &str) -> Result<String, OracleError> {
        let mut attempt: u32 = 1;

        loop {
            match self.oracle.complete(prompt).await {
                Ok(text) => return Ok(text),
                Err(err) => {
                    if attempt >= self.max_attempts {
                        warn!(
                            attempts = attempt,
                            error = %err,
                            "Oracle still failing after final attempt"
                        );
                        return Err(err);
                    }

                    let delay = self.base_delay * attempt;
                    debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Oracle attempt failed, backing off"
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Single attempt, no retry.
    pub async fn invoke_once(&self, prompt: &str) -> Result<String, OracleError> {
        self.oracle.complete(prompt).await
    }

    /// Runs the scoring prompt (with retry) and the improvement prompt
    /// (single attempt) as one atomic unit.
    pub async fn ask(
        &self,
        scoring_prompt: &str,
        improvement_prompt: &str,
    ) -> Result<OracleAnswers, OracleError> {
        let scoring = self.invoke(scoring_prompt).await?;
        let improvement = self.invoke_once(improvement_prompt).await?;

        Ok(OracleAnswers {
            scoring,
            improvement,
        })
    }
}
