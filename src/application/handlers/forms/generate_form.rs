//! GenerateFormHandler - fills a draft from an AI-generated skeleton.

use std::sync::Arc;

use crate::application::gateway::FeedbackGateway;
use crate::application::handlers::FormCommandError;
use crate::domain::form::Form;
use crate::domain::foundation::{AuthorId, Timestamp, ValidationError};
use crate::ports::IdGenerator;

/// Command to generate form content from a topic description.
#[derive(Debug, Clone)]
pub struct GenerateFormCommand {
    pub topic: String,
    /// Draft to fill; a new one is started when absent.
    pub draft: Option<Form>,
    /// Author of a newly started draft.
    pub author_id: Option<AuthorId>,
}

/// Handler for AI form generation.
///
/// Returns the filled draft without saving it.
pub struct GenerateFormHandler {
    gateway: FeedbackGateway,
    ids: Arc<dyn IdGenerator>,
}

impl GenerateFormHandler {
    pub fn new(gateway: FeedbackGateway, ids: Arc<dyn IdGenerator>) -> Self {
        Self { gateway, ids }
    }

    pub async fn handle(&self, cmd: GenerateFormCommand) -> Result<Form, FormCommandError> {
        if cmd.topic.trim().is_empty() {
            return Err(ValidationError::empty_field("topic").into());
        }

        let generated = self.gateway.generate_form_structure(&cmd.topic).await?;

        let mut form = cmd
            .draft
            .unwrap_or_else(|| Form::new(self.ids.form_id(), cmd.author_id, Timestamp::now()));
        generated.apply_to(&mut form, || self.ids.question_id());

        tracing::info!(
            form_id = %form.id(),
            questions = form.questions().len(),
            "Applied generated structure to draft"
        );
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::ids::SequentialIdGenerator;
    use crate::application::gateway::GatewayError;
    use crate::domain::form::{Question, QuestionType};
    use crate::domain::foundation::{FormId, QuestionId};
    use serde_json::json;

    fn provider() -> MockAIProvider {
        MockAIProvider::new().with_json_response(json!({
            "title": "Team offsite",
            "description": "How was the offsite?",
            "questions": [
                {"label": "Venue", "type": "RATING", "required": true},
                {"label": "Favourite session", "type": "MULTIPLE_CHOICE", "required": false}
            ]
        }))
    }

    fn handler(provider: MockAIProvider) -> GenerateFormHandler {
        GenerateFormHandler::new(
            FeedbackGateway::new(Arc::new(provider)),
            Arc::new(SequentialIdGenerator::new("id")),
        )
    }

    #[tokio::test]
    async fn fills_existing_draft_keeping_identity() {
        let mut draft = Form::new(
            FormId::new("draft-1"),
            Some(AuthorId::new("ada").unwrap()),
            Timestamp::from_millis(5).unwrap(),
        )
        .with_title("Old title")
        .with_question(Question::new(QuestionId::new("old"), QuestionType::Text));
        draft.set_published(true);

        let form = handler(provider())
            .handle(GenerateFormCommand {
                topic: "Team offsite in the mountains".to_string(),
                draft: Some(draft),
                author_id: None,
            })
            .await
            .unwrap();

        assert_eq!(form.id().as_str(), "draft-1");
        assert_eq!(form.created_at().as_millis(), 5);
        assert!(form.is_published());
        assert_eq!(form.author_id().map(|a| a.as_str()), Some("ada"));
        assert_eq!(form.title(), "Team offsite");
        let ids: Vec<&str> = form.questions().iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, vec!["id1", "id2"]);
        assert_eq!(form.questions()[1].options(), &["Option 1".to_string()]);
    }

    #[tokio::test]
    async fn starts_a_new_draft_when_none_given() {
        let form = handler(provider())
            .handle(GenerateFormCommand {
                topic: "Offsite".to_string(),
                draft: None,
                author_id: None,
            })
            .await
            .unwrap();

        assert_eq!(form.id().as_str(), "id1");
        assert_eq!(form.questions()[0].id().as_str(), "id2");
    }

    #[tokio::test]
    async fn blank_topic_is_rejected_before_calling_provider() {
        let provider = provider();
        let err = handler(provider.clone())
            .handle(GenerateFormCommand {
                topic: "  ".to_string(),
                draft: None,
                author_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FormCommandError::Validation(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn gateway_failure_is_propagated() {
        let provider = MockAIProvider::new().with_response("not json");
        let err = handler(provider)
            .handle(GenerateFormCommand {
                topic: "Offsite".to_string(),
                draft: None,
                author_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FormCommandError::Gateway(GatewayError::MalformedResponse { .. })
        ));
    }
}
