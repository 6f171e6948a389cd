//! Form repository port.
//!
//! Persistence contract for the two collections: forms and their responses.
//!
//! # Design
//!
//! - **Absence is not an error**: unknown ids read as `None` or an empty list
//! - **Forms upsert by id**: saving never creates a second record for an id
//! - **Responses append**: a response is written once and never updated
//! - **Cascade**: deleting a form deletes its responses

use crate::domain::form::Form;
use crate::domain::foundation::FormId;
use crate::domain::response::FormResponse;

use super::StorageError;

/// Repository port for forms and responses.
pub trait FormRepository: Send + Sync {
    /// All stored forms; empty when storage is uninitialized.
    fn list_forms(&self) -> Result<Vec<Form>, StorageError>;

    /// Find a form by its ID.
    ///
    /// Returns `None` if not found.
    fn find_form(&self, id: &FormId) -> Result<Option<Form>, StorageError>;

    /// Insert the form, or replace the stored record with the same id.
    fn save_form(&self, form: &Form) -> Result<(), StorageError>;

    /// Remove the form and every response whose `form_id` matches.
    ///
    /// Deleting an unknown id is a no-op.
    fn delete_form(&self, id: &FormId) -> Result<(), StorageError>;

    /// All stored responses across all forms, in insertion order.
    fn list_responses(&self) -> Result<Vec<FormResponse>, StorageError>;

    /// Responses for one form, in insertion order.
    fn list_responses_for_form(&self, form_id: &FormId) -> Result<Vec<FormResponse>, StorageError>;

    /// Append a response. Calling twice with the same id stores it twice.
    fn save_response(&self, response: &FormResponse) -> Result<(), StorageError>;
}
