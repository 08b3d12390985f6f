//! Task record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::slots;
use crate::records::{Record, RecordId};

/// Task priority, stored by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Position when listing tasks: High first, Low last.
    pub fn sort_order(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// A planned task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// A new pending, medium-priority task due at `due_date`.
    pub fn new(title: impl Into<String>, due_date: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            title: title.into(),
            description: String::new(),
            is_completed: false,
            due_date,
            priority: Priority::default(),
            created_at,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl Record for Task {
    const SLOT: &'static str = slots::TASKS;

    fn id(&self) -> RecordId {
        self.id
    }
}
