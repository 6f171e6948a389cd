//! HTTP adapter for forms, responses and analytics.
//!
//! This module exposes the form builder, response collection and the
//! analytics views via REST endpoints. See [`routes::forms_router`] for
//! the endpoint list.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{FormsAppState, FormsApiError};
pub use routes::forms_router;
