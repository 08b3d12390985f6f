//! Slot keys for each record type.

pub const TASKS: &str = "tasks";
pub const HABITS: &str = "habits";
pub const MOODS: &str = "moods";
pub const TIPS: &str = "communityTips";

/// Slots cleared by an account reset. Tips are shared content and survive.
pub const PERSONAL: [&str; 3] = [TASKS, HABITS, MOODS];
