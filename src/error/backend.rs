use thiserror::Error;

/// Errors raised while talking to the external form-processing endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// No endpoint URL was configured at build time.
    #[error("Registration endpoint is not configured")]
    NotConfigured,
    /// The request could not be sent (network unreachable, blocked, aborted).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The endpoint answered but the body was not the expected JSON document.
    #[error("Failed to parse endpoint response: {0}")]
    Parse(String),
}
