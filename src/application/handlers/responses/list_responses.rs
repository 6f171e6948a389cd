//! ListResponsesHandler - Query handler for a form's responses.

use std::sync::Arc;

use crate::domain::foundation::FormId;
use crate::domain::response::FormResponse;
use crate::ports::{FormRepository, StorageError};

#[derive(Debug, Clone)]
pub struct ListResponsesQuery {
    pub form_id: FormId,
}

pub struct ListResponsesHandler {
    repository: Arc<dyn FormRepository>,
}

impl ListResponsesHandler {
    pub fn new(repository: Arc<dyn FormRepository>) -> Self {
        Self { repository }
    }

    /// Responses in submission order; empty for an unknown form.
    pub fn handle(&self, query: ListResponsesQuery) -> Result<Vec<FormResponse>, StorageError> {
        self.repository.list_responses_for_form(&query.form_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{memory_repository, sample_response};

    #[test]
    fn lists_only_the_forms_responses() {
        let repo = memory_repository();
        repo.save_response(&sample_response("r1", "f1")).unwrap();
        repo.save_response(&sample_response("r2", "f2")).unwrap();

        let handler = ListResponsesHandler::new(repo);
        let responses = handler
            .handle(ListResponsesQuery {
                form_id: FormId::new("f1"),
            })
            .unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].id().as_str(), "r1");
        assert!(handler
            .handle(ListResponsesQuery {
                form_id: FormId::new("f9"),
            })
            .unwrap()
            .is_empty());
    }
}
