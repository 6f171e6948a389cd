//! Analytics module - derived statistics and summarization payloads.
//!
//! Nothing here is persisted; every value is recomputed from a form and its
//! responses.

mod aggregation;
mod digest;
mod summary;

pub use aggregation::{
    aggregate_form, summarize_question, Breakdown, FormAnalytics, OptionCount, QuestionSummary,
    RatingBucket, ShareCount, NO, RATING_SCALE, YES,
};
pub use digest::{FeedbackDigest, QuestionDigest};
pub use summary::FeedbackSummary;
