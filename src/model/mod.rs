//! Models - Storage-backed documents for the storefront.
//!
//! Models provide a small document-store abstraction: typed CRUD, an
//! all-or-nothing batch insert, and guarded find-and-modify operations that
//! evaluate their predicate and apply their mutation in one store-level step.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{InMemoryModelStore, Model, ModelsExt};
//!
//! let store = InMemoryModelStore::new();
//! store.models::<Product>().insert(&product)?;
//!
//! // Decrement stock only if enough is on hand.
//! let applied = store.models::<Product>().modify("P001", &mut |p: &mut Product| {
//!     p.take_stock(2)
//! })?;
//! ```

mod in_memory;
mod model_repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be stored as models.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this model type (e.g., "products", "order_items").
    /// Maps to a collection in MongoDB, a table in SQL, a key prefix in KV stores.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this model instance.
    fn id(&self) -> &str;
}

/// Model data together with its write count; every successful write bumps it.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Error type for model store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A document with this id already exists.
    #[error("conflict on {collection}:{id}: document already exists")]
    Conflict { collection: String, id: String },
    /// Serialization/deserialization error.
    #[error("model serialization error: {0}")]
    Serde(String),
    /// Storage-level error.
    #[error("model storage error: {0}")]
    Storage(String),
}

pub use in_memory::InMemoryModelStore;
pub use model_repository::{ModelRepository, ModelsExt};
pub use store::{Guard, ModelStore};
