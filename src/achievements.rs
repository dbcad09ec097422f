//! Achievement record types.
//!
//! Placeholder only: records persist with the save so the schema is stable,
//! but nothing evaluates or unlocks them in this scope.

use serde::{Deserialize, Serialize};

/// Currency rewards attached to an achievement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementReward {
    #[serde(default)]
    pub berries: f64,
    #[serde(default)]
    pub diamonds: u32,
}

/// A single achievement entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reward: AchievementReward,
    pub unlocked: bool,
}
