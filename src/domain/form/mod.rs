//! Form module - evaluation templates and their questions.
//!
//! A [`Form`] is edited in the builder and saved as a whole record; the
//! question types here are shared by the response and analytics modules.

mod errors;
mod form;
mod generated;
mod question;

pub use errors::FormError;
pub use form::{share_url, Form};
pub use generated::{GeneratedForm, GeneratedQuestion, GENERATED_QUESTION_COUNT};
pub use question::{Question, QuestionType, QuestionUpdate, DEFAULT_CHOICE_OPTION};
