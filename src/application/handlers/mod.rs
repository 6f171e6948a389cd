//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Storage-only handlers are synchronous; those that reach the AI gateway
//! are async.

pub mod analytics;
pub mod forms;
pub mod responses;

mod errors;

pub use analytics::{
    GetFormAnalyticsHandler, GetFormAnalyticsQuery, SummarizeFeedbackCommand,
    SummarizeFeedbackHandler,
};
pub use errors::{AnalyticsError, FormCommandError};
pub use forms::{
    CreateDraftCommand, CreateDraftHandler, DeleteFormCommand, DeleteFormHandler,
    FormOverview, GenerateFormCommand, GenerateFormHandler, GetFormHandler, GetFormQuery,
    ListFormsHandler, SaveFormCommand, SaveFormHandler, SaveFormResult,
};
pub use responses::{
    ListResponsesHandler, ListResponsesQuery, SubmitResponseCommand, SubmitResponseHandler,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::storage::{FormStore, InMemoryKeyValueStore};
    use crate::domain::form::{Form, Question, QuestionType};
    use crate::domain::foundation::{FormId, QuestionId, ResponseId, Timestamp};
    use crate::domain::response::{Answer, FormResponse, Respondent};
    use crate::ports::FormRepository;

    pub fn memory_repository() -> Arc<dyn FormRepository> {
        Arc::new(FormStore::new(Arc::new(InMemoryKeyValueStore::new())))
    }

    /// A titled form with one required rating question `q1`.
    pub fn sample_form(id: &str) -> Form {
        Form::new(FormId::new(id), None, Timestamp::from_millis(0).unwrap())
            .with_title(format!("Form {}", id))
            .with_question(
                Question::new(QuestionId::new("q1"), QuestionType::Rating).with_label("Rate it"),
            )
    }

    /// A response answering `q1` with 4.
    pub fn sample_response(id: &str, form_id: &str) -> FormResponse {
        FormResponse::new(
            ResponseId::new(id),
            FormId::new(form_id),
            vec![Answer::new(QuestionId::new("q1"), 4_i64)],
            Timestamp::from_millis(1).unwrap(),
            Respondent::Anonymous,
        )
    }
}
