//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VERDICT_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERDICT_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model identifier handed to the oracle client. Default:
    /// `gpt-4o-mini`.
    pub model: String,

    /// Name of the environment variable holding the oracle credential.
    /// Default: `OPENAI_API_KEY`. When the named variable is unset the
    /// pipeline skips the oracle entirely and scores deterministically.
    pub credential_var: String,

    /// Scoring-call attempts before giving up. Default: `3`.
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds; attempt `n` waits `n` times
    /// this. Default: `1000`.
    pub retry_base_delay_ms: u64,

    /// Include error internals in caller-facing error bodies. Default:
    /// `false`.
    pub diagnostics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            credential_var: "OPENAI_API_KEY".to_string(),
            max_attempts: 3,
            retry_base_delay_ms: 1_000,
            diagnostics: false,
        }
    }
}

impl Config {
    const ENV_MODEL: &'static str = "VERDICT_MODEL";
    const ENV_CREDENTIAL_VAR: &'static str = "VERDICT_CREDENTIAL_VAR";
    const ENV_MAX_ATTEMPTS: &'static str = "VERDICT_MAX_ATTEMPTS";
    const ENV_RETRY_BASE_DELAY_MS: &'static str = "VERDICT_RETRY_BASE_DELAY_MS";
    const ENV_DIAGNOSTICS: &'static str = "VERDICT_DIAGNOSTICS";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let credential_var =
            Self::parse_string_from_env(Self::ENV_CREDENTIAL_VAR, defaults.credential_var);
        let max_attempts =
            Self::parse_u32_from_env(Self::ENV_MAX_ATTEMPTS, defaults.max_attempts)?;
        let retry_base_delay_ms = Self::parse_u64_from_env(
            Self::ENV_RETRY_BASE_DELAY_MS,
            defaults.retry_base_delay_ms,
        )?;
        let diagnostics = Self::parse_bool_from_env(Self::ENV_DIAGNOSTICS, defaults.diagnostics);

        Ok(Self {
            model,
            credential_var,
            max_attempts,
            retry_base_delay_ms,
            diagnostics,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts {
                value: self.max_attempts,
            });
        }

        if self.credential_var.trim().is_empty() {
            return Err(ConfigError::EmptyCredentialVar);
        }

        Ok(())
    }

    /// Base backoff delay as a [`Duration`].
    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    /// Returns `true` when the configured credential variable is set and
    /// non-blank.
    pub fn credential_present(&self) -> bool {
        env::var(&self.credential_var)
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(default)
    }

    fn parse_u32_from_env(var_name: &'static str, default: u32) -> Result<u32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                variable: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                variable: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        match env::var(var_name) {
            Ok(value) => matches!(value.trim(), "1" | "true" | "TRUE" | "yes"),
            Err(_) => default,
        }
    }
}
