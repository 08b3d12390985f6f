//! HabitTracker - the habit collection plus the streak engine.

use std::sync::Arc;

use super::types::Habit;
use crate::clock::Clock;
use crate::event_bus::EventBus;
use crate::persistence::Persistence;
use crate::records::{RecordCollection, RecordId};

/// Owns the habit collection and keeps every habit's streaks current.
pub struct HabitTracker {
    habits: RecordCollection<Habit>,
    clock: Arc<dyn Clock>,
}

impl HabitTracker {
    /// Load habits and bring their streaks up to date for today.
    pub fn load(persistence: Persistence, events: Option<Arc<EventBus>>, clock: Arc<dyn Clock>) -> Self {
        let mut tracker = Self {
            habits: RecordCollection::load(persistence, events),
            clock,
        };
        tracker.refresh_streaks();
        tracker
    }

    pub fn habits(&self) -> &[Habit] {
        self.habits.records()
    }

    pub fn find(&self, id: RecordId) -> Option<&Habit> {
        self.habits.find(id)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Add a habit. Its streaks are derived from its history before saving.
    pub fn add(&mut self, mut habit: Habit) -> &Habit {
        habit.recompute_streak(self.clock.as_ref());
        self.habits.add(habit)
    }

    /// Replace a habit by id (full-record edit). No-op if it is unknown.
    pub fn update(&mut self, mut habit: Habit) -> Option<&Habit> {
        habit.recompute_streak(self.clock.as_ref());
        self.habits.update(habit)
    }

    pub fn delete(&mut self, id: RecordId) -> Option<Habit> {
        self.habits.delete(id)
    }

    /// Toggle today's completion for a habit and save. No-op if it is unknown.
    pub fn toggle_completion(&mut self, id: RecordId) -> Option<&Habit> {
        let clock = Arc::clone(&self.clock);
        self.habits
            .modify(id, |habit| {
                habit.toggle_completion(clock.as_ref());
            })
    }

    /// Recompute every habit's streaks against the current date.
    ///
    /// Stored streaks go stale when a day passes without a toggle. Returns the
    /// number of habits whose streaks changed; those are saved and announced.
    pub fn refresh_streaks(&mut self) -> usize {
        let clock = Arc::clone(&self.clock);
        let changed = self.habits.modify_each(|habit| {
            let before = (habit.current_streak, habit.best_streak);
            habit.recompute_streak(clock.as_ref());
            before != (habit.current_streak, habit.best_streak)
        });

        if changed > 0 {
            log::info!("Refreshed streaks for {} habits", changed);
        }
        changed
    }

    /// Sum of current streaks across all habits.
    pub fn total_streak(&self) -> u32 {
        self.habits().iter().map(|h| h.current_streak).sum()
    }

    /// Fraction of habits completed today, 0.0 when there are none.
    pub fn todays_completion_rate(&self) -> f64 {
        if self.habits.is_empty() {
            return 0.0;
        }

        let completed = self
            .habits()
            .iter()
            .filter(|h| h.is_completed_today(self.clock.as_ref()))
            .count();
        completed as f64 / self.habits.len() as f64
    }
}

// ============================================================================
// TESTS
// ============================================================================
