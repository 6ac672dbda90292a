//! Key-value persistence port and its backends.
//!
//! The stores depend only on this narrow interface, so the session state can
//! be backed by memory in tests and by JSON files on disk in the demo binary.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreResult;

/// Narrow persistence port: opaque text blobs under string keys.
pub trait KeyValueStorage: Send + Sync {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete the blob under `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}
