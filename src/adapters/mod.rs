//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value backends and the form store built on them
//! - `ai` - Gemini and mock AI providers
//! - `ids` - Identifier generators
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
pub mod ids;
pub mod storage;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use storage::{FileKeyValueStore, FormStore, InMemoryKeyValueStore};
