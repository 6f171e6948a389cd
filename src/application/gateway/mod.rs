//! AI summarization gateway.

mod errors;
mod feedback_gateway;
pub mod prompts;

pub use errors::GatewayError;
pub use feedback_gateway::FeedbackGateway;
