//! # lifescape-core
//!
//! Core logic for LifeScape, a personal lifestyle tracker.
//!
//! This crate is framework-agnostic: it knows nothing about screens or
//! terminals. Front ends build a [`LifescapeContext`] and work through the
//! view-models it hands out.
//!
//! ## Key Concepts
//!
//! - **Slot**: a named, persisted collection (tasks, habits, moods, tips)
//! - **Habit engine**: completion and streak rules over calendar days
//! - **View-model**: a loaded collection plus its derived queries
//! - **ChangeEvent**: published after every applied mutation

pub mod clock;
pub mod context;
pub mod event_bus;
pub mod habits;
pub mod moods;
pub mod paths;
pub mod persistence;
pub mod records;
pub mod tasks;
pub mod tips;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{LifescapeContext, LifescapeContextBuilder};
pub use event_bus::{ChangeEvent, ChangeKind, EventBus};
pub use habits::{Frequency, Habit, HabitTracker};
pub use moods::{Mood, MoodEntry, MoodJournal};
pub use persistence::{JsonDirStore, MemoryStore, Persistence, SlotStore, StoreError};
pub use records::{Record, RecordId};
pub use tasks::{Planner, Priority, Task};
pub use tips::{Category, CommunityTip, TipBoard};
