use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use super::TextOracle;
use super::error::OracleError;

/// Scripted in-memory oracle.
///
/// Replies are consumed in the order they were enqueued; an exhausted
/// script answers with `Unavailable`. Every received prompt is recorded for
/// assertions.
#[derive(Debug, Default, Clone)]
pub struct MockOracle {
    script: Arc<Mutex<VecDeque<Result<String, OracleError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockOracle {
    /// Creates an oracle with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a successful completion.
    pub fn enqueue_text(&self, text: &str) {
        self.script.lock().push_back(Ok(text.to_string()));
    }

    /// Enqueues a failed attempt.
    pub fn enqueue_failure(&self, reason: &str) {
        self.script.lock().push_back(Err(OracleError::Unavailable {
            reason: reason.to_string(),
        }));
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

impl TextOracle for MockOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts.lock().push(prompt.to_string());

        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| {
                Err(OracleError::Unavailable {
                    reason: "mock script exhausted".to_string(),
                })
            })
    }
}
