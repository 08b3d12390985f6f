//! MoodJournal - the persisted mood log.

use std::sync::Arc;

use super::types::MoodEntry;
use crate::clock::Clock;
use crate::event_bus::EventBus;
use crate::persistence::Persistence;
use crate::records::{RecordCollection, RecordId};

/// How many entries `recent_moods` returns.
pub const RECENT_LIMIT: usize = 7;

pub struct MoodJournal {
    moods: RecordCollection<MoodEntry>,
    clock: Arc<dyn Clock>,
}

impl MoodJournal {
    pub fn load(persistence: Persistence, events: Option<Arc<EventBus>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            moods: RecordCollection::load(persistence, events),
            clock,
        }
    }

    pub fn moods(&self) -> &[MoodEntry] {
        self.moods.records()
    }

    pub fn find(&self, id: RecordId) -> Option<&MoodEntry> {
        self.moods.find(id)
    }

    pub fn add(&mut self, entry: MoodEntry) -> &MoodEntry {
        self.moods.add(entry)
    }

    pub fn update(&mut self, entry: MoodEntry) -> Option<&MoodEntry> {
        self.moods.update(entry)
    }

    pub fn delete(&mut self, id: RecordId) -> Option<MoodEntry> {
        self.moods.delete(id)
    }

    /// The newest entries, newest first.
    pub fn recent_moods(&self) -> Vec<&MoodEntry> {
        let mut moods: Vec<_> = self.moods().iter().collect();
        moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        moods.truncate(RECENT_LIMIT);
        moods
    }

    /// Mean mood value over all entries, 0.0 when the journal is empty.
    pub fn average_mood(&self) -> f64 {
        if self.moods.is_empty() {
            return 0.0;
        }

        let total: u32 = self.moods().iter().map(|m| u32::from(m.mood.value())).sum();
        f64::from(total) / self.moods.len() as f64
    }

    /// The first entry, in storage order, logged today.
    pub fn todays_mood(&self) -> Option<&MoodEntry> {
        self.moods().iter().find(|m| self.clock.is_today(m.timestamp))
    }
}
