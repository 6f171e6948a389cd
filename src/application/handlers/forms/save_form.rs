//! SaveFormHandler - Command handler for persisting an edited form.

use std::sync::Arc;

use crate::application::handlers::FormCommandError;
use crate::domain::form::Form;
use crate::ports::FormRepository;

/// Command to save a form as a whole record.
#[derive(Debug, Clone)]
pub struct SaveFormCommand {
    pub form: Form,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveFormResult {
    /// The record as stored.
    pub form: Form,
    /// True if no form with this id existed before.
    pub created: bool,
}

/// Handler for saving forms.
pub struct SaveFormHandler {
    repository: Arc<dyn FormRepository>,
}

impl SaveFormHandler {
    pub fn new(repository: Arc<dyn FormRepository>) -> Self {
        Self { repository }
    }

    pub fn handle(&self, cmd: SaveFormCommand) -> Result<SaveFormResult, FormCommandError> {
        let mut form = cmd.form;
        form.validate_for_save()?;

        let existing = self.repository.find_form(form.id())?;
        if let Some(stored) = &existing {
            form.adopt_origin(stored);
        }

        self.repository.save_form(&form)?;

        let created = existing.is_none();
        tracing::info!(
            form_id = %form.id(),
            questions = form.questions().len(),
            published = form.is_published(),
            created,
            "Saved form"
        );

        Ok(SaveFormResult { form, created })
    }
}
