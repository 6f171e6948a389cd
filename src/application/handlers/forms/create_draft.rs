//! CreateDraftHandler - starts a new, unsaved form.

use std::sync::Arc;

use crate::domain::form::Form;
use crate::domain::foundation::{AuthorId, Timestamp};
use crate::ports::IdGenerator;

/// Command to start a new form draft.
#[derive(Debug, Clone, Default)]
pub struct CreateDraftCommand {
    pub author_id: Option<AuthorId>,
}

/// Handler for creating drafts.
///
/// The draft gets its permanent id here but is not stored until saved.
pub struct CreateDraftHandler {
    ids: Arc<dyn IdGenerator>,
}

impl CreateDraftHandler {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    pub fn handle(&self, cmd: CreateDraftCommand) -> Form {
        let form = Form::new(self.ids.form_id(), cmd.author_id, Timestamp::now());
        tracing::debug!(form_id = %form.id(), "Created form draft");
        form
    }
}
