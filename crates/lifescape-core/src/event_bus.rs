//! Change notification for record collections.
//!
//! Collections never push state into a UI. After a mutation has been applied
//! and saved, they publish a [`ChangeEvent`] here, and whoever cares (a
//! terminal renderer, a test, a future GUI) subscribes.
//!
//! # Example
//!
//! ```rust
//! use lifescape_core::event_bus::{ChangeEvent, ChangeKind, EventBus};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.emit(ChangeEvent::new("habits", ChangeKind::Reset, None, serde_json::Value::Null));
//!
//! let event = rx.try_recv().unwrap();
//! assert_eq!(event.event_type(), "habits:reset");
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::records::RecordId;

/// Default channel capacity for the event bus.
/// Subscribers that fall further behind than this miss events (lag).
const DEFAULT_CAPACITY: usize = 256;

/// What happened to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
    Reset,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Updated => "updated",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Reset => "reset",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single applied change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// Slot of the collection that changed.
    pub slot: String,

    pub kind: ChangeKind,

    /// The affected record, if the change targeted one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<RecordId>,

    /// Snapshot of the record after the change (`null` for deletes and resets).
    #[serde(default)]
    pub record: serde_json::Value,
}

impl ChangeEvent {
    pub fn new(
        slot: impl Into<String>,
        kind: ChangeKind,
        record_id: Option<RecordId>,
        record: serde_json::Value,
    ) -> Self {
        Self {
            slot: slot.into(),
            kind,
            record_id,
            record,
        }
    }

    /// Event type identifier, e.g. `habits:updated`.
    pub fn event_type(&self) -> String {
        format!("{}:{}", self.slot, self.kind)
    }
}

/// Broadcasts [`ChangeEvent`]s to any number of subscribers.
///
/// Sending never blocks, so emitting from synchronous code is fine.
/// Subscribers read with `try_recv` or, in async code, `recv().await`.
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    /// Create a new EventBus with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new EventBus buffering up to `capacity` events per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event. Returns how many subscribers received it.
    pub fn emit(&self, event: ChangeEvent) -> usize {
        log::debug!("change {}", event.event_type());
        self.sender.send(event).unwrap_or(0)
    }

    /// Publish a change carrying a serialized snapshot of `record`.
    pub fn emit_change<T: Serialize>(
        &self,
        slot: &str,
        kind: ChangeKind,
        record_id: Option<RecordId>,
        record: Option<&T>,
    ) -> usize {
        let snapshot = match record.map(serde_json::to_value).transpose() {
            Ok(value) => value.unwrap_or(serde_json::Value::Null),
            Err(e) => {
                log::warn!("Failed to serialize change payload for {}: {}", slot, e);
                serde_json::Value::Null
            }
        };

        self.emit(ChangeEvent::new(slot, kind, record_id, snapshot))
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Get the current number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
