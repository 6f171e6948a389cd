//! DeleteFormHandler - removes a form together with its responses.

use std::sync::Arc;

use crate::application::handlers::FormCommandError;
use crate::domain::foundation::FormId;
use crate::ports::FormRepository;

#[derive(Debug, Clone)]
pub struct DeleteFormCommand {
    pub form_id: FormId,
}

pub struct DeleteFormHandler {
    repository: Arc<dyn FormRepository>,
}

impl DeleteFormHandler {
    pub fn new(repository: Arc<dyn FormRepository>) -> Self {
        Self { repository }
    }

    /// Deleting an unknown form succeeds without effect.
    pub fn handle(&self, cmd: DeleteFormCommand) -> Result<(), FormCommandError> {
        self.repository.delete_form(&cmd.form_id)?;
        tracing::info!(form_id = %cmd.form_id, "Deleted form and its responses");
        Ok(())
    }
}
