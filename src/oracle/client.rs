use genai::chat::{ChatMessage, ChatRequest};
use tracing::{debug, error};

use crate::config::Config;

use super::TextOracle;
use super::error::OracleError;

/// Oracle backed by the `genai` multi-provider client.
///
/// The provider credential is resolved by `genai` itself from the process
/// environment; construction fails fast with [`OracleError::ConfigMissing`]
/// when the configured variable is absent so the pipeline can skip
/// invocation instead of burning retries on guaranteed failures.
#[derive(Clone)]
pub struct GenAiOracle {
    client: genai::Client,
    model: String,
}

impl std::fmt::Debug for GenAiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiOracle")
            .field("model", &self.model)
            .finish()
    }
}

impl GenAiOracle {
    /// Builds a client for the configured model, verifying the credential
    /// variable is present and non-blank.
    pub fn from_config(config: &Config) -> Result<Self, OracleError> {
        if !config.credential_present() {
            return Err(OracleError::ConfigMissing {
                variable: config.credential_var.clone(),
            });
        }

        Ok(Self {
            client: genai::Client::default(),
            model: config.model.clone(),
        })
    }

    /// Model identifier requests are issued against.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextOracle for GenAiOracle {
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling oracle");

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                error!(model = %self.model, error = %e, "Oracle request failed");
                OracleError::Unavailable {
                    reason: e.to_string(),
                }
            })?;

        let text = response.first_text().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(OracleError::Unavailable {
                reason: "empty completion".to_string(),
            });
        }

        Ok(text)
    }
}
