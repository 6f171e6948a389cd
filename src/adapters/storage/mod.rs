//! Storage Adapters
//!
//! Key-value backends and the form repository built on top of them.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores each key as a JSON file on disk
//! - **InMemoryKeyValueStore** - Stores values in memory (testing/development)
//! - **FormStore** - Forms and responses over either backend
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, FormStore};
//!
//! let store = FormStore::new(Arc::new(FileKeyValueStore::new("./data")));
//! ```

mod file_store;
mod form_store;
mod in_memory_store;

pub use file_store::FileKeyValueStore;
pub use form_store::{FormStore, FORMS_KEY, RESPONSES_KEY};
pub use in_memory_store::InMemoryKeyValueStore;
