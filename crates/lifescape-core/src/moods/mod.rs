//! Mood journaling.

pub mod journal;
pub mod types;

pub use journal::MoodJournal;
pub use types::{Mood, MoodEntry};
