//! Form-specific error types.

use thiserror::Error;

use crate::domain::foundation::QuestionId;

/// Errors raised while editing or saving a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form title is required")]
    TitleRequired,

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Question id used more than once: {0}")]
    DuplicateQuestionId(QuestionId),
}
