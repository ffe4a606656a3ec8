//! Persistence contract: a durable string key-value store.
//!
//! The engine persists exactly two entries after every history snapshot (the
//! serialized scene and the background color) and reads them back once at
//! startup. Anything that can hold strings durably — browser local storage,
//! a file per key, a table — can implement this.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for durable string key-value stores.
///
/// Operations are synchronous: persistence runs inside the same event-driven
/// turn that produced the snapshot, mirroring the local-storage contract.
pub trait KeyValueStore {
    /// Store a value under a key, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Fetch the value for a key, or `None` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
}
