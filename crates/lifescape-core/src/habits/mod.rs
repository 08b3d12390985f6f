//! Habit tracking.
//!
//! - [`types`] - the `Habit` record
//! - [`engine`] - completion and streak rules
//! - [`tracker`] - the persisted habit collection

pub mod engine;
pub mod tracker;
pub mod types;

pub use tracker::HabitTracker;
pub use types::{Frequency, Habit};
