//! TipBoard - the persisted tip collection.
//!
//! Unmoderated tips stay in storage but never show up in a view.

use std::sync::Arc;

use super::types::CommunityTip;
use crate::event_bus::EventBus;
use crate::persistence::Persistence;
use crate::records::{RecordCollection, RecordId};

/// How many tips `top_tips` returns.
pub const TOP_LIMIT: usize = 5;

pub struct TipBoard {
    tips: RecordCollection<CommunityTip>,
}

impl TipBoard {
    pub fn load(persistence: Persistence, events: Option<Arc<EventBus>>) -> Self {
        Self {
            tips: RecordCollection::load(persistence, events),
        }
    }

    /// Every stored tip, moderated or not, in storage order.
    pub fn all_tips(&self) -> &[CommunityTip] {
        self.tips.records()
    }

    /// Visible tips, newest first.
    pub fn tips(&self) -> Vec<&CommunityTip> {
        let mut tips: Vec<_> = self.visible().collect();
        tips.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tips
    }

    /// The most liked visible tips.
    pub fn top_tips(&self) -> Vec<&CommunityTip> {
        let mut tips: Vec<_> = self.visible().collect();
        tips.sort_by(|a, b| b.likes.cmp(&a.likes));
        tips.truncate(TOP_LIMIT);
        tips
    }

    pub fn find(&self, id: RecordId) -> Option<&CommunityTip> {
        self.tips.find(id)
    }

    pub fn add(&mut self, tip: CommunityTip) -> &CommunityTip {
        self.tips.add(tip)
    }

    pub fn update(&mut self, tip: CommunityTip) -> Option<&CommunityTip> {
        self.tips.update(tip)
    }

    pub fn delete(&mut self, id: RecordId) -> Option<CommunityTip> {
        self.tips.delete(id)
    }

    /// Add one like. No-op for unknown or unmoderated tips.
    pub fn like(&mut self, id: RecordId) -> Option<&CommunityTip> {
        if !self.find(id)?.is_moderated {
            return None;
        }
        self.tips.modify(id, |tip| tip.likes = tip.likes.saturating_add(1))
    }

    fn visible(&self) -> impl Iterator<Item = &CommunityTip> {
        self.tips.records().iter().filter(|t| t.is_moderated)
    }
}
