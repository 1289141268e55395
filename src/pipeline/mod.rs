//! The answer evaluation pipeline.
//!
//! One evaluation is one suspend-capable unit of work: build the prompts,
//! ask the oracle as an atomic scoring+improvement unit under bounded
//! retry, normalize whatever text came back, degrade to the deterministic
//! scorer when the oracle is missing, failing or unparsable, canonicalize,
//! and commit. Only request validation and persistence failures ever reach
//! the caller; the happy path always carries a complete canonical record.

pub mod error;
pub mod types;


pub use error::EvalError;
pub use types::{ErrorBody, EvaluationRequest, EvaluationResponse};

use tracing::{debug, info};

use crate::canonical::{self, FallbackReason, ScoreOrigin};
use crate::config::Config;
use crate::heuristic;
use crate::normalize::{self, Extraction};
use crate::oracle::{ModelInvoker, Sleeper, TextOracle, TokioSleeper};
use crate::persist::PersistenceCoordinator;
use crate::prompt;
use crate::store::CandidateStore;

/// Evaluates candidate answers and commits the resulting scores.
pub struct AnswerEvaluator<O, S, SL = TokioSleeper> {
    invoker: Option<ModelInvoker<O, SL>>,
    coordinator: PersistenceCoordinator<S>,
}

impl<O: TextOracle, S: CandidateStore> AnswerEvaluator<O, S, TokioSleeper> {
    /// Creates an evaluator with the real clock.
    ///
    /// Pass `None` for the oracle when no credential is configured; every
    /// evaluation then scores deterministically.
    pub fn new(oracle: Option<O>, store: S, config: &Config) -> Self {
        Self::with_sleeper(oracle, store, config, TokioSleeper)
    }
}

impl<O: TextOracle, S: CandidateStore, SL: Sleeper> AnswerEvaluator<O, S, SL> {
    /// Creates an evaluator with an explicit sleep implementation.
    pub fn with_sleeper(oracle: Option<O>, store: S, config: &Config, sleeper: SL) -> Self {
        let invoker = oracle.map(|oracle| {
            ModelInvoker::with_sleeper(
                oracle,
                config.max_attempts,
                config.retry_base_delay(),
                sleeper,
            )
        });

        Self {
            invoker,
            coordinator: PersistenceCoordinator::new(store),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        self.coordinator.store()
    }

    /// Runs one full evaluation: validate, score, canonicalize, commit.
    pub async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResponse, EvalError> {
        validate(&request)?;

        let expected_answer = request.expected_answer();

        let oracle_answers = match &self.invoker {
            Some(invoker) => {
                let scoring = prompt::scoring_prompt(
                    &request.question_text,
                    expected_answer,
                    &request.answer_text,
                );
                let improvement =
                    prompt::improvement_prompt(&request.question_text, &request.answer_text);

                match invoker.ask(&scoring, &improvement).await {
                    Ok(answers) => Some(answers),
                    Err(err) => {
                        info!(error = %err, "Oracle unit failed, scoring deterministically");
                        None
                    }
                }
            }
            None => {
                debug!("No oracle configured, scoring deterministically");
                None
            }
        };

        let (record, origin) = match oracle_answers {
            Some(answers) => {
                let extraction = normalize::extract(&answers.scoring);
                debug!(tier = extraction.tier(), "Oracle text normalized");

                match extraction {
                    Extraction::Parsed(map) | Extraction::PartiallyParsed(map) => {
                        let origin = ScoreOrigin::Oracle;
                        let record =
                            canonical::canonicalize(&map, &origin, Some(&answers.improvement));
                        (record, origin)
                    }
                    Extraction::Escalate { reason } => {
                        // The improvement call succeeded, so its text is
                        // kept even though the scores fall back.
                        let map = heuristic::score_answer(&request.answer_text, expected_answer)
                            .into_dimension_map();
                        let origin = ScoreOrigin::Fallback { reason };
                        let record =
                            canonical::canonicalize(&map, &origin, Some(&answers.improvement));
                        (record, origin)
                    }
                }
            }
            None => {
                let map = heuristic::score_answer(&request.answer_text, expected_answer)
                    .into_dimension_map();
                let origin = ScoreOrigin::Fallback {
                    reason: FallbackReason::ModelUnavailable,
                };
                let record = canonical::canonicalize(&map, &origin, None);
                (record, origin)
            }
        };

        let outcome = self
            .coordinator
            .commit(
                &request.candidate_key,
                request.question_index,
                &request.answer_text,
                record.clone(),
            )
            .await?;

        info!(
            candidate = %request.candidate_key,
            question_index = request.question_index,
            origin = origin.debug_status(),
            completed = outcome.is_completed,
            "Evaluation committed"
        );

        Ok(EvaluationResponse {
            improvement: record.improvement.clone(),
            record,
            is_completed: outcome.is_completed,
            origin,
        })
    }
}

/// Rejects requests missing their required fields before any invocation.
fn validate(request: &EvaluationRequest) -> Result<(), EvalError> {
    if request.candidate_key.trim().is_empty() {
        return Err(EvalError::Validation {
            reason: "candidate key must not be empty".to_string(),
        });
    }

    if request.question_text.trim().is_empty() {
        return Err(EvalError::Validation {
            reason: "question text must not be empty".to_string(),
        });
    }

    Ok(())
}
