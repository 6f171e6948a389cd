//! SubmitResponseHandler - validates and stores a respondent's answers.

use std::sync::Arc;

use crate::application::handlers::FormCommandError;
use crate::domain::foundation::{FormId, Timestamp};
use crate::domain::response::{FormResponse, ResponseSubmission};
use crate::ports::{FormRepository, IdGenerator};

/// Command to submit answers to a form.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub form_id: FormId,
    pub submission: ResponseSubmission,
}

/// Handler for response submission.
///
/// A rejected submission stores nothing.
pub struct SubmitResponseHandler {
    repository: Arc<dyn FormRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl SubmitResponseHandler {
    pub fn new(repository: Arc<dyn FormRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    pub fn handle(&self, cmd: SubmitResponseCommand) -> Result<FormResponse, FormCommandError> {
        let form = self
            .repository
            .find_form(&cmd.form_id)?
            .ok_or_else(|| FormCommandError::NotFound(cmd.form_id.clone()))?;

        let response = FormResponse::submit(
            self.ids.response_id(),
            &form,
            cmd.submission,
            Timestamp::now(),
        )
        .map_err(|e| {
            tracing::debug!(form_id = %cmd.form_id, error = %e, "Rejected submission");
            e
        })?;

        self.repository.save_response(&response)?;

        tracing::info!(
            form_id = %cmd.form_id,
            response_id = %response.id(),
            answers = response.answers().len(),
            attributed = response.respondent().is_attributed(),
            "Recorded response"
        );
        Ok(response)
    }
}
