//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; `app` layers
//! them into the served router.

mod app;
pub mod forms;

// Re-export key types for convenience
pub use app::build_app;
pub use forms::{forms_router, FormsAppState};
