//! Character, skill, and aura types.

use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

/// Elemental affinity, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aura {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Aura {
    /// All affinities, used for uniform random assignment at draw time.
    pub const ALL: [Aura; 4] = [Aura::Red, Aura::Green, Aura::Blue, Aura::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Aura::Red => "red",
            Aura::Green => "green",
            Aura::Blue => "blue",
            Aura::Yellow => "yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    Offensive,
    Defensive,
    Utility,
}

/// A fixed skill entry assigned at creation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    /// Signed power: negative values are healing effects.
    pub power: i32,
    pub description: String,
}

/// An owned character instance.
///
/// Created only by the draw engine (or the bootstrap captain); leveled only
/// through the progression ledger; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Tier, fixed at creation.
    pub rarity: Rarity,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub aura: Aura,
    /// Passive income contribution, fixed at creation to the tier's base rate.
    pub bps: f64,
    pub skills: Vec<Skill>,
    pub icon: String,
    /// Origin saga id (flag data only, nothing is simulated here).
    pub saga: String,
    /// Origin arc id.
    pub arc: String,
    /// Ownership count, always at least 1. Duplicates are separate entries.
    pub owned: u32,
}

impl Character {
    /// Highest level this character's tier allows.
    pub fn max_level(&self) -> u32 {
        self.rarity.params().max_level
    }

    /// True once the level cap is reached.
    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aura_all_covers_four_affinities() {
        assert_eq!(Aura::ALL.len(), 4);
        assert_eq!(Aura::Red.name(), "red");
        assert_eq!(Aura::Yellow.name(), "yellow");
    }

    #[test]
    fn test_max_level_follows_tier() {
        let captain = crate::character::generation::starting_captain();
        assert_eq!(captain.rarity, Rarity::Normal);
        assert_eq!(captain.max_level(), 45);
        assert!(!captain.is_max_level());
    }

    #[test]
    fn test_is_max_level_at_cap() {
        let mut captain = crate::character::generation::starting_captain();
        captain.level = 45;
        assert!(captain.is_max_level());
        // Levels past the cap should never exist, but the check is >= anyway
        captain.level = 46;
        assert!(captain.is_max_level());
    }

    #[test]
    fn test_character_serde_round_trip() {
        let captain = crate::character::generation::starting_captain();
        let json = serde_json::to_string(&captain).unwrap();
        let loaded: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, captain);
    }
}
