//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `KeyValueStore` - Raw named-key storage backend
//! - `FormRepository` - Forms and responses, with cascading delete
//!
//! ## Service Ports
//!
//! - `IdGenerator` - Fresh identifiers for new records
//! - `AIProvider` - Generative-text provider

mod ai_provider;
mod form_repository;
mod id_generator;
mod key_value_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};
pub use form_repository::FormRepository;
pub use id_generator::IdGenerator;
pub use key_value_store::{KeyValueStore, StorageError};
