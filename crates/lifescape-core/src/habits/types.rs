//! Habit record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engine;
use crate::clock::Clock;
use crate::persistence::slots;
use crate::records::{Record, RecordId};

pub const DEFAULT_ICON: &str = "star.fill";
pub const DEFAULT_COLOR: &str = "#4a8fdc";

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// How often a habit is meant to be done.
///
/// Stored by label so new variants never shift existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Custom,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Custom];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Custom => "Custom",
        }
    }
}

/// A tracked habit with its completion history and streaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique habit identifier.
    pub id: RecordId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Icon reference (SF Symbol style name).
    #[serde(default = "default_icon")]
    pub icon_name: String,

    /// Display color as `#rrggbb`.
    #[serde(default = "default_color")]
    pub color_hex: String,

    #[serde(default)]
    pub frequency: Frequency,

    /// One timestamp per day the habit was marked done, in no particular order.
    #[serde(default)]
    pub completed_dates: Vec<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    /// Consecutive days ending today. Derived from `completed_dates`.
    #[serde(default)]
    pub current_streak: u32,

    /// Highest `current_streak` ever seen. Never decreases on its own.
    #[serde(default)]
    pub best_streak: u32,
}

impl Habit {
    /// A new habit with default icon, color and frequency and no history.
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            description: String::new(),
            icon_name: default_icon(),
            color_hex: default_color(),
            frequency: Frequency::default(),
            completed_dates: Vec::new(),
            created_at,
            current_streak: 0,
            best_streak: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = icon_name.into();
        self
    }

    pub fn with_color(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = color_hex.into();
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// See [`engine::is_completed_today`].
    pub fn is_completed_today(&self, clock: &dyn Clock) -> bool {
        engine::is_completed_today(&self.completed_dates, clock)
    }

    /// See [`engine::toggle_completion`].
    pub fn toggle_completion(&mut self, clock: &dyn Clock) -> bool {
        engine::toggle_completion(self, clock)
    }

    /// See [`engine::recompute_streak`].
    pub fn recompute_streak(&mut self, clock: &dyn Clock) {
        engine::recompute_streak(self, clock)
    }
}

impl Record for Habit {
    const SLOT: &'static str = slots::HABITS;

    fn id(&self) -> RecordId {
        self.id
    }
}
