//! SummarizeFeedbackHandler - AI narrative over a form's responses.

use std::sync::Arc;

use crate::application::gateway::FeedbackGateway;
use crate::application::handlers::AnalyticsError;
use crate::domain::analytics::{FeedbackDigest, FeedbackSummary};
use crate::domain::foundation::FormId;
use crate::ports::FormRepository;

#[derive(Debug, Clone)]
pub struct SummarizeFeedbackCommand {
    pub form_id: FormId,
}

pub struct SummarizeFeedbackHandler {
    repository: Arc<dyn FormRepository>,
    gateway: FeedbackGateway,
}

impl SummarizeFeedbackHandler {
    pub fn new(repository: Arc<dyn FormRepository>, gateway: FeedbackGateway) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        cmd: SummarizeFeedbackCommand,
    ) -> Result<FeedbackSummary, AnalyticsError> {
        let form = self
            .repository
            .find_form(&cmd.form_id)?
            .ok_or_else(|| AnalyticsError::NotFound(cmd.form_id.clone()))?;
        let responses = self.repository.list_responses_for_form(&cmd.form_id)?;
        if responses.is_empty() {
            return Err(AnalyticsError::NoResponses(cmd.form_id));
        }

        let digest = FeedbackDigest::from_form(&form, &responses);
        let summary = self.gateway.summarize_feedback(&digest).await?;

        tracing::info!(
            form_id = %cmd.form_id,
            responses = responses.len(),
            sentiment = %summary.sentiment(),
            "Summarized feedback"
        );
        Ok(summary)
    }
}
