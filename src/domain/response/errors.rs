//! Submission error types.

use thiserror::Error;

use crate::domain::foundation::QuestionId;

/// Reasons a submission is rejected. A rejected submission saves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Question \"{label}\" is required")]
    RequiredQuestionUnanswered { question_id: QuestionId, label: String },

    #[error("Answer refers to a question not on this form: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Question answered more than once: {0}")]
    DuplicateAnswer(QuestionId),
}

impl SubmissionError {
    /// The question the error is about.
    pub fn question_id(&self) -> &QuestionId {
        match self {
            SubmissionError::RequiredQuestionUnanswered { question_id, .. } => question_id,
            SubmissionError::UnknownQuestion(id) | SubmissionError::DuplicateAnswer(id) => id,
        }
    }
}
