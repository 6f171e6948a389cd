//! Identifier generation port.

use crate::domain::foundation::{FormId, QuestionId, ResponseId};

/// Source of fresh, unique identifiers for new records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;

    fn form_id(&self) -> FormId {
        FormId::new(self.next_id())
    }

    fn question_id(&self) -> QuestionId {
        QuestionId::new(self.next_id())
    }

    fn response_id(&self) -> ResponseId {
        ResponseId::new(self.next_id())
    }
}
