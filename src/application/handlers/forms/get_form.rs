//! GetFormHandler - Query handler for a single form.

use std::sync::Arc;

use crate::domain::form::Form;
use crate::domain::foundation::FormId;
use crate::ports::{FormRepository, StorageError};

#[derive(Debug, Clone)]
pub struct GetFormQuery {
    pub form_id: FormId,
}

pub struct GetFormHandler {
    repository: Arc<dyn FormRepository>,
}

impl GetFormHandler {
    pub fn new(repository: Arc<dyn FormRepository>) -> Self {
        Self { repository }
    }

    /// Returns `None` for an unknown id. Published or not, a form is
    /// reachable by id.
    pub fn handle(&self, query: GetFormQuery) -> Result<Option<Form>, StorageError> {
        self.repository.find_form(&query.form_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{memory_repository, sample_form};

    #[test]
    fn finds_unpublished_form_by_id() {
        let repo = memory_repository();
        let form = sample_form("f1");
        assert!(!form.is_published());
        repo.save_form(&form).unwrap();

        let found = GetFormHandler::new(repo)
            .handle(GetFormQuery {
                form_id: FormId::new("f1"),
            })
            .unwrap();

        assert_eq!(found, Some(form));
    }

    #[test]
    fn unknown_id_is_none() {
        let found = GetFormHandler::new(memory_repository())
            .handle(GetFormQuery {
                form_id: FormId::new("missing"),
            })
            .unwrap();
        assert!(found.is_none());
    }
}
