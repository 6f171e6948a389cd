//! Form command and query handlers.

mod create_draft;
mod delete_form;
mod generate_form;
mod get_form;
mod list_forms;
mod save_form;

pub use create_draft::{CreateDraftCommand, CreateDraftHandler};
pub use delete_form::{DeleteFormCommand, DeleteFormHandler};
pub use generate_form::{GenerateFormCommand, GenerateFormHandler};
pub use get_form::{GetFormHandler, GetFormQuery};
pub use list_forms::{FormOverview, ListFormsHandler};
pub use save_form::{SaveFormCommand, SaveFormHandler, SaveFormResult};
