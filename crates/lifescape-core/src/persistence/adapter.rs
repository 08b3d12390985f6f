//! Typed, never-failing access to slots.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::memory::MemoryStore;
use super::store::{SlotStore, StoreError};

/// JSON encoding of whole record collections over a [`SlotStore`].
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn SlotStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    /// Persistence over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn SlotStore> {
        &self.store
    }

    /// Load a slot, surfacing decode and I/O errors.
    ///
    /// A slot that was never written is an empty collection, not an error.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.read(key)? {
            Some(contents) => Ok(serde_json::from_str(&contents)?),
            None => Ok(Vec::new()),
        }
    }

    /// Load a slot, treating any failure as "no data".
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Discarding unreadable slot {}: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite a slot with `records`, surfacing errors.
    ///
    /// Encoding happens before the store is touched, so a record that fails
    /// to serialize leaves the slot unchanged.
    pub fn try_save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        self.store.write(key, &json)?;
        log::debug!("Saved {} records to slot {}", records.len(), key);
        Ok(())
    }

    /// Overwrite a slot with `records`. Failures are logged, never raised.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) {
        if let Err(e) = self.try_save(key, records) {
            log::warn!("Failed to save slot {}: {}", key, e);
        }
    }

    /// Clear the named slots.
    pub fn reset(&self, keys: &[&str]) {
        for key in keys {
            if let Err(e) = self.store.remove(key) {
                log::warn!("Failed to clear slot {}: {}", key, e);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
