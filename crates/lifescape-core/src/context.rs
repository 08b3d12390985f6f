//! LifescapeContext - the explicitly built bundle of shared services.
//!
//! There are no global singletons. A front end builds one context, chooses
//! where data lives and which clock to trust, and asks it for view-models:
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │   LifescapeContext   │
//!                 ├──────────────────────┤
//!                 │  - Persistence       │
//!                 │  - Clock             │
//!                 │  - EventBus          │
//!                 └──────────┬───────────┘
//!        ┌──────────────┬────┴─────────┬──────────────┐
//!        ▼              ▼              ▼              ▼
//!  HabitTracker      Planner      MoodJournal      TipBoard
//! ```
//!
//! Tests substitute a [`MemoryStore`] and a [`FixedClock`](crate::clock::FixedClock)
//! through the builder without touching any shared state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::event_bus::{ChangeEvent, ChangeKind, EventBus};
use crate::habits::HabitTracker;
use crate::moods::MoodJournal;
use crate::persistence::{slots, JsonDirStore, MemoryStore, Persistence, SlotStore};
use crate::tasks::Planner;
use crate::tips::TipBoard;

/// Configuration for building a LifescapeContext.
#[derive(Default)]
pub struct LifescapeContextBuilder {
    data_dir: Option<PathBuf>,
    store: Option<Arc<dyn SlotStore>>,
    event_bus: Option<Arc<EventBus>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LifescapeContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep slot files in `dir` (a [`JsonDirStore`]).
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Use a specific store. Takes precedence over `data_dir`.
    pub fn store(mut self, store: Arc<dyn SlotStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use an existing EventBus (for testing or custom configurations).
    pub fn event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Use a specific clock instead of the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the LifescapeContext.
    ///
    /// Store selection: explicit store, then a `JsonDirStore` at `data_dir`,
    /// then an in-memory store whose data is lost on drop.
    pub fn build(self) -> LifescapeContext {
        let store: Arc<dyn SlotStore> = match (self.store, &self.data_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => Arc::new(JsonDirStore::new(dir)),
            (None, None) => {
                log::debug!("No data directory configured, using in-memory store");
                Arc::new(MemoryStore::new())
            }
        };

        LifescapeContext {
            event_bus: self.event_bus.unwrap_or_else(|| Arc::new(EventBus::new())),
            persistence: Persistence::new(store),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            data_dir: self.data_dir,
        }
    }
}

/// Shared services for all LifeScape operations.
///
/// Cloning is cheap: every field is a shared pointer.
#[derive(Clone)]
pub struct LifescapeContext {
    /// Receives a [`ChangeEvent`] for every applied mutation.
    pub event_bus: Arc<EventBus>,
    persistence: Persistence,
    clock: Arc<dyn Clock>,
    data_dir: Option<PathBuf>,
}

impl LifescapeContext {
    pub fn builder() -> LifescapeContextBuilder {
        LifescapeContextBuilder::new()
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// The data directory, if the context was built with one.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn habit_tracker(&self) -> HabitTracker {
        HabitTracker::load(
            self.persistence.clone(),
            Some(Arc::clone(&self.event_bus)),
            Arc::clone(&self.clock),
        )
    }

    pub fn planner(&self) -> Planner {
        Planner::load(
            self.persistence.clone(),
            Some(Arc::clone(&self.event_bus)),
            Arc::clone(&self.clock),
        )
    }

    pub fn mood_journal(&self) -> MoodJournal {
        MoodJournal::load(
            self.persistence.clone(),
            Some(Arc::clone(&self.event_bus)),
            Arc::clone(&self.clock),
        )
    }

    pub fn tip_board(&self) -> TipBoard {
        TipBoard::load(self.persistence.clone(), Some(Arc::clone(&self.event_bus)))
    }

    /// Clear tasks, habits and moods. Tips are kept.
    ///
    /// View-models loaded before the reset still hold their old records;
    /// load them again afterwards.
    pub fn reset_all_data(&self) {
        self.persistence.reset(&slots::PERSONAL);
        for slot in slots::PERSONAL {
            self.event_bus
                .emit(ChangeEvent::new(slot, ChangeKind::Reset, None, serde_json::Value::Null));
        }
        log::info!("Reset personal data");
    }
}

impl Default for LifescapeContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::habits::Habit;
    use crate::moods::{Mood, MoodEntry};
    use crate::tasks::Task;
    use crate::tips::CommunityTip;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn fixed() -> Arc<FixedClock> {
        Arc::new(FixedClock::utc(Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap()))
    }

    #[test]
    fn builder_defaults_to_memory_store() {
        let ctx = LifescapeContext::builder().build();
        assert!(ctx.data_dir().is_none());

        let mut planner = ctx.planner();
        let now = ctx.clock().now();
        planner.add(Task::new("ephemeral", now, now));

        assert_eq!(ctx.planner().tasks().len(), 1);
    }

    #[test]
    fn builder_uses_provided_event_bus() {
        let bus = Arc::new(EventBus::new());
        let ctx = LifescapeContext::builder().event_bus(bus.clone()).build();

        assert!(Arc::ptr_eq(&ctx.event_bus, &bus));
    }

    #[test]
    fn explicit_store_wins_over_data_dir() {
        let store = Arc::new(MemoryStore::new());
        let ctx = LifescapeContext::builder()
            .data_dir("/nonexistent/lifescape")
            .store(store.clone())
            .clock(fixed())
            .build();

        let mut tips = ctx.tip_board();
        tips.add(CommunityTip::new("t", "c", ctx.clock().now()));

        assert_eq!(store.keys(), vec![slots::TIPS.to_string()]);
    }

    #[test]
    fn data_dir_persists_across_contexts() {
        let dir = tempdir().unwrap();
        let clock = fixed();

        let id = {
            let ctx = LifescapeContext::builder()
                .data_dir(dir.path())
                .clock(clock.clone())
                .build();
            let mut habits = ctx.habit_tracker();
            let id = habits.add(Habit::new("Read", clock.now())).id;
            habits.toggle_completion(id);
            id
        };

        assert!(dir.path().join("habits.json").exists());

        let ctx = LifescapeContext::builder()
            .data_dir(dir.path())
            .clock(clock)
            .build();
        let habits = ctx.habit_tracker();
        let habit = habits.find(id).unwrap();
        assert_eq!(habit.current_streak, 1);
        assert_eq!(ctx.data_dir(), Some(dir.path()));
    }

    #[test]
    fn reset_clears_personal_slots_and_keeps_tips() {
        let clock = fixed();
        let ctx = LifescapeContext::builder().clock(clock.clone()).build();
        let now = clock.now();

        ctx.habit_tracker().add(Habit::new("h", now));
        ctx.planner().add(Task::new("t", now, now));
        ctx.mood_journal().add(MoodEntry::new(Mood::Happy, now));
        ctx.tip_board().add(CommunityTip::new("tip", "content", now));

        let mut rx = ctx.event_bus.subscribe();
        ctx.reset_all_data();

        assert!(ctx.habit_tracker().habits().is_empty());
        assert!(ctx.planner().tasks().is_empty());
        assert!(ctx.mood_journal().moods().is_empty());
        assert_eq!(ctx.tip_board().tips().len(), 1);

        let reset_slots: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
            .filter(|e| e.kind == ChangeKind::Reset)
            .map(|e| e.slot)
            .collect();
        assert_eq!(reset_slots, vec!["tasks", "habits", "moods"]);
    }

    #[test]
    fn context_is_cheaply_clonable() {
        let ctx = LifescapeContext::default();
        let ctx2 = ctx.clone();

        assert!(Arc::ptr_eq(&ctx.event_bus, &ctx2.event_bus));
        assert!(Arc::ptr_eq(ctx.persistence().store(), ctx2.persistence().store()));
    }
}
