//! Collection persistence — each collection is read and written as a
//! single unit, last writer wins. No merge semantics.

pub mod json_file;
pub mod memory;
pub mod seed;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Full-collection repository: `load` returns the whole collection,
/// `save` overwrites it wholesale.
pub trait CollectionStore<T>: Send + Sync {
    fn load(&self) -> Result<Vec<T>, StoreError>;
    fn save(&self, items: &[T]) -> Result<(), StoreError>;
}
