//! In-memory storage backend
//!
//! HashMap-based backend with a RwLock for concurrency. Nothing is
//! persisted; intended for tests and UI prototypes.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::Result;

use super::StorageBackend;

/// Volatile backend keeping documents in a locked map
#[derive(Default)]
pub struct MemoryBackend {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently holding a document
    pub fn key_count(&self) -> usize {
        self.documents.read().len()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.documents
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
