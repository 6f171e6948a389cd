//! Response command and query handlers.

mod list_responses;
mod submit_response;

pub use list_responses::{ListResponsesHandler, ListResponsesQuery};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler};
