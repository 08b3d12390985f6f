//! Mood journal entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::slots;
use crate::records::{Record, RecordId};

/// Five-step mood scale, stored by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "Very Happy")]
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    #[serde(rename = "Very Sad")]
    VerySad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::VerySad,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "😄",
            Mood::Happy => "🙂",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::VerySad => "😢",
        }
    }

    /// Score from 5 (very happy) down to 1 (very sad).
    pub fn value(&self) -> u8 {
        match self {
            Mood::VeryHappy => 5,
            Mood::Happy => 4,
            Mood::Neutral => 3,
            Mood::Sad => 2,
            Mood::VerySad => 1,
        }
    }
}

/// One logged mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: RecordId,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MoodEntry {
    pub fn new(mood: Mood, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            mood,
            note: String::new(),
            timestamp,
            tags: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl Record for MoodEntry {
    const SLOT: &'static str = slots::MOODS;

    fn id(&self) -> RecordId {
        self.id
    }
}
