//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer-valued variable could not be parsed.
    #[error("failed to parse {variable}='{value}' as an integer: {source}")]
    IntParseError {
        variable: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Retry attempt count must allow at least one attempt.
    #[error("invalid attempt count '{value}': must be at least 1")]
    InvalidMaxAttempts { value: u32 },

    /// The credential variable name itself must not be blank.
    #[error("credential variable name must not be empty")]
    EmptyCredentialVar,
}
