//! Handler-level error types.

use thiserror::Error;

use crate::application::gateway::GatewayError;
use crate::domain::form::FormError;
use crate::domain::foundation::{FormId, ValidationError};
use crate::domain::response::SubmissionError;
use crate::ports::StorageError;

/// Errors from form and response commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormCommandError {
    #[error("Form not found: {0}")]
    NotFound(FormId),

    #[error("Form id mismatch: path has {expected}, body has {actual}")]
    IdMismatch { expected: FormId, actual: FormId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors from analytics queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("Form not found: {0}")]
    NotFound(FormId),

    #[error("Form {0} has no responses to summarize")]
    NoResponses(FormId),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
