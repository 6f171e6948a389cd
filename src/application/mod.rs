//! Application layer - Commands, Queries, Handlers and the AI gateway.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod gateway;
pub mod handlers;

pub use gateway::{FeedbackGateway, GatewayError};
pub use handlers::{AnalyticsError, FormCommandError};
