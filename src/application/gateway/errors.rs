//! Gateway error types.

use thiserror::Error;

use crate::ports::AIError;

/// Failures of an AI gateway call. None of them carries a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("AI provider failed: {0}")]
    Provider(#[from] AIError),

    #[error("AI service returned no text")]
    EmptyResponse,

    #[error("AI service returned a malformed {expected}: {reason}")]
    MalformedResponse {
        expected: &'static str,
        reason: String,
    },

    #[error("A request for {key} is already in progress")]
    AlreadyInProgress { key: String },

    #[error("No AI provider is configured")]
    NotConfigured,
}

impl GatewayError {
    pub fn malformed(expected: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            expected,
            reason: reason.into(),
        }
    }
}
