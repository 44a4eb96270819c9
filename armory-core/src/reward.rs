//! Milestone reward entries shown on the progress page.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::item::DisplayProperties;

/// A player's progress on one reward of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub reward_entry_hash: u32,
    #[serde(default)]
    pub earned: bool,
    #[serde(default)]
    pub redeemed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDefinition {
    pub display: DisplayProperties,
}

/// Reward definitions for one milestone category, keyed by entry hash.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewardCategory {
    #[serde(default)]
    pub reward_entries: BTreeMap<u32, RewardDefinition>,
}

impl RewardCategory {
    #[must_use]
    pub fn definition(&self, entry: &RewardEntry) -> Option<&RewardDefinition> {
        self.reward_entries.get(&entry.reward_entry_hash)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardStatus {
    Redeemed,
    Earned,
    NotEarned,
}

impl RewardStatus {
    /// Redeemed outranks earned.
    #[must_use]
    pub const fn of(entry: &RewardEntry) -> Self {
        if entry.redeemed {
            Self::Redeemed
        } else if entry.earned {
            Self::Earned
        } else {
            Self::NotEarned
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Redeemed => "redeemed",
            Self::Earned => "completed",
            Self::NotEarned => "uncompleted",
        }
    }

    #[must_use]
    pub const fn tooltip_key(self) -> &'static str {
        match self {
            Self::Redeemed => "progress.reward_redeemed",
            Self::Earned => "progress.reward_earned",
            Self::NotEarned => "progress.reward_not_earned",
        }
    }
}
