//! Analytics query handlers.

mod get_form_analytics;
mod summarize_feedback;

pub use get_form_analytics::{GetFormAnalyticsHandler, GetFormAnalyticsQuery};
pub use summarize_feedback::{SummarizeFeedbackCommand, SummarizeFeedbackHandler};
