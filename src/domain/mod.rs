//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `form` - Forms, questions and builder-side editing
//! - `response` - Respondent submissions and submission-time validation
//! - `analytics` - Aggregation engine and summarization payloads

pub mod analytics;
pub mod form;
pub mod foundation;
pub mod response;
