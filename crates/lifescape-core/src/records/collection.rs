//! In-memory record collection mirrored to one slot.
//!
//! Every mutation follows the same contract:
//!
//! 1. Apply the change to the in-memory `Vec`
//! 2. Save the whole collection to its slot
//! 3. Publish a [`ChangeEvent`](crate::event_bus::ChangeEvent)
//!
//! Mutations that target a missing id do nothing: no save, no event.

use std::sync::Arc;

use super::{Record, RecordId};
use crate::event_bus::{ChangeKind, EventBus};
use crate::persistence::Persistence;

/// The full collection of one record type.
pub struct RecordCollection<T: Record> {
    records: Vec<T>,
    persistence: Persistence,
    events: Option<Arc<EventBus>>,
}

impl<T: Record> RecordCollection<T> {
    /// Load the collection from its slot. Missing or corrupt data loads empty.
    pub fn load(persistence: Persistence, events: Option<Arc<EventBus>>) -> Self {
        let records = persistence.load(T::SLOT);
        Self {
            records,
            persistence,
            events,
        }
    }

    /// Discard in-memory state and read the slot again.
    pub fn reload(&mut self) {
        self.records = self.persistence.load(T::SLOT);
    }

    /// All records in storage order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by ID.
    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Append a record.
    ///
    /// A record whose id is already present replaces the stored one in place,
    /// so the collection never holds two records with the same id.
    pub fn add(&mut self, record: T) -> &T {
        let id = record.id();
        let (index, kind) = match self.position(id) {
            Some(index) => {
                self.records[index] = record;
                (index, ChangeKind::Updated)
            }
            None => {
                self.records.push(record);
                (self.records.len() - 1, ChangeKind::Added)
            }
        };

        self.save();
        self.notify(kind, Some(id), Some(&self.records[index]));
        &self.records[index]
    }

    /// Replace the record with the same id. No-op if it is not present.
    pub fn update(&mut self, record: T) -> Option<&T> {
        let id = record.id();
        let index = self.position(id)?;
        self.records[index] = record;

        self.save();
        self.notify(ChangeKind::Updated, Some(id), Some(&self.records[index]));
        Some(&self.records[index])
    }

    /// Mutate the record with `id` in place. No-op if it is not present.
    ///
    /// `apply` must not change the record's id.
    pub fn modify<F>(&mut self, id: RecordId, apply: F) -> Option<&T>
    where
        F: FnOnce(&mut T),
    {
        let index = self.position(id)?;
        apply(&mut self.records[index]);

        self.save();
        self.notify(ChangeKind::Updated, Some(id), Some(&self.records[index]));
        Some(&self.records[index])
    }

    /// Run `apply` over every record; it returns whether it changed the record.
    ///
    /// Saves once if anything changed and publishes one event per changed
    /// record. Returns the number of changed records.
    pub fn modify_each<F>(&mut self, mut apply: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let changed: Vec<usize> = self
            .records
            .iter_mut()
            .enumerate()
            .filter_map(|(index, record)| apply(record).then_some(index))
            .collect();

        if !changed.is_empty() {
            self.save();
            for &index in &changed {
                let record = &self.records[index];
                self.notify(ChangeKind::Updated, Some(record.id()), Some(record));
            }
        }

        changed.len()
    }

    /// Remove the record with `id`. No-op if it is not present.
    pub fn delete(&mut self, id: RecordId) -> Option<T> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);

        self.save();
        self.notify::<T>(ChangeKind::Deleted, Some(id), None);
        Some(removed)
    }

    /// Write the whole collection to its slot.
    pub fn save(&self) {
        self.persistence.save(T::SLOT, &self.records);
    }

    fn notify<R: serde::Serialize>(&self, kind: ChangeKind, id: Option<RecordId>, record: Option<&R>) {
        if let Some(events) = &self.events {
            events.emit_change(T::SLOT, kind, id, record);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
