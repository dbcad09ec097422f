//! Progression ledger: leveling costs and stat application.
//!
//! Costs are flat-rate: `levels * 100 * current_level`, using the level
//! *before* the increase. Buying N levels at once is therefore cheaper than
//! buying them one at a time; that pricing is intentional and must not be
//! "fixed" into a geometric sum. Likewise, a purchase that would overshoot
//! the tier cap still charges (and applies stat gains) for every level
//! requested while the level itself clamps to the cap.

use crate::character::types::Character;
use crate::constants::*;
use crate::errors::TransactionError;

/// Outcome of a successful level-up application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpOutcome {
    pub levels_requested: u32,
    pub levels_granted: u32,
    pub new_level: u32,
}

/// Berry cost to buy `levels` levels at the character's current level.
pub fn level_up_cost(character: &Character, levels: u32) -> u64 {
    levels as u64 * LEVEL_COST_PER_LEVEL * character.level as u64
}

/// Applies a level purchase to the character.
///
/// Fails with [`TransactionError::MaxLevelReached`] when already at the tier
/// cap, leaving the character untouched. On success the level clamps to the
/// cap while stat deltas scale with the levels *requested*.
pub fn apply_level_up(
    character: &mut Character,
    levels: u32,
) -> Result<LevelUpOutcome, TransactionError> {
    if character.is_max_level() {
        return Err(TransactionError::MaxLevelReached);
    }

    let old_level = character.level;
    let new_level = (old_level + levels).min(character.max_level());

    character.level = new_level;
    character.hp += levels * LEVEL_HP_GAIN;
    character.max_hp += levels * LEVEL_HP_GAIN;
    character.attack += levels * LEVEL_ATTACK_GAIN;
    character.defense += levels * LEVEL_DEFENSE_GAIN;
    character.speed += levels * LEVEL_SPEED_GAIN;

    Ok(LevelUpOutcome {
        levels_requested: levels,
        levels_granted: new_level - old_level,
        new_level,
    })
}
