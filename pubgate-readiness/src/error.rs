//! Error types for pubgate-readiness
//!
//! Scoring and validation functions are total and return data, not errors.
//! The only fallible boundaries are the external schema collaborator
//! (`ValidationError`, always downgraded to report data by the validator)
//! and the publish gate (`PublishError`).

use thiserror::Error;

/// External schema collaborator failure
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Could not reach the collaborator
    #[error("Network error: {0}")]
    Network(String),

    /// Collaborator answered with a non-success HTTP status
    #[error("Validator returned HTTP {0}")]
    Status(u16),

    /// Collaborator response could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Collaborator did not answer in time
    #[error("Validator timed out after {0} ms")]
    Timeout(u64),

    /// Internal processing error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ValidationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ValidationError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            ValidationError::Status(status.as_u16())
        } else {
            ValidationError::Network(err.to_string())
        }
    }
}

/// Publish attempt refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    /// Critical readiness issues remain. Only the count is reported; the
    /// itemized list lives in the validation view.
    #[error("Cannot publish: {count} blocking issue(s) must be resolved first. Open the validation panel for details.")]
    Blocked { count: usize },
}
