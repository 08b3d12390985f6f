//! The raw slot storage seam.

use thiserror::Error;

/// Errors raised by slot stores and the typed adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slot store lock poisoned")]
    Poisoned,
}

/// Key-value storage of serialized collections.
///
/// Implementations only move strings around; encoding lives in
/// [`Persistence`](super::Persistence).
pub trait SlotStore: Send + Sync {
    /// Read a slot. `Ok(None)` if it was never written or has been removed.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the slot's contents.
    fn write(&self, key: &str, contents: &str) -> Result<(), StoreError>;

    /// Remove a slot. Removing a missing slot succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
