//! Response module - respondent submissions and their answers.

mod answer;
mod errors;
mod respondent;
mod response;

pub use answer::{Answer, AnswerValue};
pub use errors::SubmissionError;
pub use respondent::{Respondent, ANONYMOUS_SENTINEL};
pub use response::{FormResponse, ResponseSubmission};
