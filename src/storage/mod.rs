//! Storage Module
//!
//! Pluggable key-value backends holding one serialized collection
//! document per storage key.
//!
//! ## Contract
//! - `get` on an absent key is `Ok(None)`, never an error
//! - `set` replaces the whole document; there is no partial update
//! - a failed `set` leaves the previously persisted value in effect

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// String-valued key-value storage, the collaborator every collection
/// document is persisted through.
///
/// Backends are process-local; nothing here protects against another
/// process touching the same files.
pub trait StorageBackend: Send + Sync {
    /// Read the raw document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the document stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
