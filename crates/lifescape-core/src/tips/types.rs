//! Tip record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::slots;
use crate::records::{Record, RecordId};

pub const ANONYMOUS: &str = "Anonymous";

fn default_author() -> String {
    ANONYMOUS.to_string()
}

fn default_moderated() -> bool {
    true
}

/// Tip topic, stored by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    Productivity,
    Wellness,
    Fitness,
    Mindfulness,
    Nutrition,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Productivity,
        Category::Wellness,
        Category::Fitness,
        Category::Mindfulness,
        Category::Nutrition,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Productivity => "Productivity",
            Category::Wellness => "Wellness",
            Category::Fitness => "Fitness",
            Category::Mindfulness => "Mindfulness",
            Category::Nutrition => "Nutrition",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTip {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub likes: u32,
    pub timestamp: DateTime<Utc>,
    /// Hidden from every view while false.
    #[serde(default = "default_moderated")]
    pub is_moderated: bool,
}

impl CommunityTip {
    pub fn new(title: impl Into<String>, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            title: title.into(),
            content: content.into(),
            author: default_author(),
            category: Category::default(),
            likes: 0,
            timestamp,
            is_moderated: true,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl Record for CommunityTip {
    const SLOT: &'static str = slots::TIPS;

    fn id(&self) -> RecordId {
        self.id
    }
}
