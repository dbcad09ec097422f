//! Draw engine: tier selection from a weighted sample and recruit synthesis.

use rand::Rng;
use uuid::Uuid;

use crate::character::types::{Aura, Character, Skill, SkillKind};
use crate::constants::*;
use crate::rarity::Rarity;

/// Icon pool recruits are stamped with, chosen uniformly at draw time.
const RECRUIT_ICONS: [&str; 5] = ["⚔️", "🏴‍☠️", "👑", "💎", "🌟"];

/// Selects the rarity tier for a draw sample in `[0, 100)`.
///
/// Walks [`Rarity::ALL`] in declared order accumulating weights; the first
/// tier whose cumulative weight reaches the sample wins. A sample at exactly
/// a boundary (e.g. 50.0) belongs to the tier that closed the boundary.
/// Samples at or above 100 fall through to Legendary so the function stays
/// total even on an out-of-contract input.
pub fn roll_rarity(sample: f64) -> Rarity {
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += rarity.params().weight;
        if sample <= cumulative {
            return rarity;
        }
    }
    Rarity::Legendary
}

/// The fixed 4-entry kit every drawn recruit carries.
fn standard_skill_kit() -> Vec<Skill> {
    vec![
        Skill {
            name: "Attack".to_string(),
            kind: SkillKind::Offensive,
            power: 50,
            description: "Basic attack".to_string(),
        },
        Skill {
            name: "Guard".to_string(),
            kind: SkillKind::Defensive,
            power: 0,
            description: "Raises defense".to_string(),
        },
        Skill {
            name: "Heal".to_string(),
            kind: SkillKind::Utility,
            power: -30,
            description: "Restores HP".to_string(),
        },
        Skill {
            name: "Special Strike".to_string(),
            kind: SkillKind::Offensive,
            power: 80,
            description: "Powerful attack".to_string(),
        },
    ]
}

/// Synthesizes a fresh level-1 recruit from a draw sample.
///
/// Pure apart from the injected `rng` (aura and icon) and the generated id;
/// the caller owns applying the result to state.
pub fn generate_recruit(sample: f64, rng: &mut impl Rng) -> Character {
    let rarity = roll_rarity(sample);
    let params = rarity.params();

    let max_hp = RECRUIT_BASE_HP + params.max_level * RECRUIT_HP_PER_MAX_LEVEL;
    let aura = Aura::ALL[rng.gen_range(0..Aura::ALL.len())];
    let icon = RECRUIT_ICONS[rng.gen_range(0..RECRUIT_ICONS.len())];

    Character {
        id: Uuid::new_v4().to_string(),
        name: format!("Pirate {}", rarity.code()),
        rarity,
        level: 1,
        hp: max_hp,
        max_hp,
        attack: RECRUIT_BASE_ATTACK + params.max_level,
        defense: RECRUIT_BASE_DEFENSE + params.max_level / RECRUIT_DEFENSE_DIVISOR,
        speed: RECRUIT_BASE_SPEED + params.max_level / RECRUIT_SPEED_DIVISOR,
        aura,
        bps: params.bps,
        skills: standard_skill_kit(),
        icon: icon.to_string(),
        saga: "east_blue".to_string(),
        arc: "romance_dawn".to_string(),
        owned: 1,
    }
}

/// The bootstrap captain every new game starts with.
pub fn starting_captain() -> Character {
    Character {
        id: "luffy_east_blue".to_string(),
        name: "Monkey D. Luffy".to_string(),
        rarity: Rarity::Normal,
        level: 1,
        hp: 100,
        max_hp: 100,
        attack: 25,
        defense: 15,
        speed: 20,
        aura: Aura::Red,
        bps: 0.5,
        skills: vec![
            Skill {
                name: "Gum-Gum Pistol".to_string(),
                kind: SkillKind::Offensive,
                power: 60,
                description: "Stretches an arm out for a long-range punch".to_string(),
            },
            Skill {
                name: "Gum-Gum Gatling".to_string(),
                kind: SkillKind::Offensive,
                power: 40,
                description: "A flurry of rapid punches".to_string(),
            },
            Skill {
                name: "Determination".to_string(),
                kind: SkillKind::Utility,
                power: 0,
                description: "Raises attack by 20%".to_string(),
            },
            Skill {
                name: "Evade".to_string(),
                kind: SkillKind::Defensive,
                power: 0,
                description: "Dodges the next attack".to_string(),
            },
        ],
        icon: "🏴‍☠️".to_string(),
        saga: "east_blue".to_string(),
        arc: "romance_dawn".to_string(),
        owned: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_rarity_cumulative_boundaries() {
        // Cumulative boundaries: 50, 80, 95, 99.89, 99.99, 100
        assert_eq!(roll_rarity(0.0), Rarity::Normal);
        assert_eq!(roll_rarity(49.999), Rarity::Normal);
        // A sample at exactly the boundary stays in the earlier tier
        assert_eq!(roll_rarity(50.0), Rarity::Normal);
        assert_eq!(roll_rarity(50.001), Rarity::Rare);
        assert_eq!(roll_rarity(80.0), Rarity::Rare);
        assert_eq!(roll_rarity(80.001), Rarity::SuperRare);
        assert_eq!(roll_rarity(95.0), Rarity::SuperRare);
        assert_eq!(roll_rarity(95.001), Rarity::SuperSuperRare);
        assert_eq!(roll_rarity(99.89), Rarity::SuperSuperRare);
        assert_eq!(roll_rarity(99.9), Rarity::UltraRare);
        assert_eq!(roll_rarity(99.99), Rarity::UltraRare);
        assert_eq!(roll_rarity(99.995), Rarity::Legendary);
    }

    #[test]
    fn test_roll_rarity_out_of_contract_falls_back_to_legendary() {
        assert_eq!(roll_rarity(100.0), Rarity::Legendary);
        assert_eq!(roll_rarity(250.0), Rarity::Legendary);
    }

    #[test]
    fn test_generate_recruit_normal_stats() {
        let mut rng = rand::thread_rng();
        // Normal tier: max level 45
        let recruit = generate_recruit(10.0, &mut rng);
        assert_eq!(recruit.rarity, Rarity::Normal);
        assert_eq!(recruit.level, 1);
        assert_eq!(recruit.max_hp, 140); // 50 + 45*2
        assert_eq!(recruit.hp, recruit.max_hp);
        assert_eq!(recruit.attack, 55); // 10 + 45
        assert_eq!(recruit.defense, 27); // 5 + 45/2
        assert_eq!(recruit.speed, 30); // 15 + 45/3
        assert_eq!(recruit.bps, 0.5);
        assert_eq!(recruit.name, "Pirate N");
        assert_eq!(recruit.owned, 1);
    }

    #[test]
    fn test_generate_recruit_legendary_stats() {
        let mut rng = rand::thread_rng();
        let recruit = generate_recruit(99.999, &mut rng);
        assert_eq!(recruit.rarity, Rarity::Legendary);
        assert_eq!(recruit.max_hp, 300); // 50 + 125*2
        assert_eq!(recruit.attack, 135); // 10 + 125
        assert_eq!(recruit.defense, 67); // 5 + 125/2
        assert_eq!(recruit.speed, 56); // 15 + 125/3
        assert_eq!(recruit.bps, 25.0);
        assert_eq!(recruit.name, "Pirate L");
    }

    #[test]
    fn test_generate_recruit_kit_is_fixed() {
        let mut rng = rand::thread_rng();
        let recruit = generate_recruit(60.0, &mut rng);
        assert_eq!(recruit.skills.len(), 4);
        assert_eq!(recruit.skills[0].name, "Attack");
        assert_eq!(recruit.skills[2].power, -30);
        assert_eq!(recruit.skills[3].kind, SkillKind::Offensive);
    }

    #[test]
    fn test_generate_recruit_unique_ids() {
        let mut rng = rand::thread_rng();
        let first = generate_recruit(10.0, &mut rng);
        let second = generate_recruit(10.0, &mut rng);
        assert_ne!(first.id, second.id);
        assert!(Aura::ALL.contains(&first.aura));
        assert!(RECRUIT_ICONS.contains(&first.icon.as_str()));
    }

    #[test]
    fn test_starting_captain_matches_bootstrap_data() {
        let captain = starting_captain();
        assert_eq!(captain.id, "luffy_east_blue");
        assert_eq!(captain.rarity, Rarity::Normal);
        assert_eq!(captain.level, 1);
        assert_eq!(captain.hp, 100);
        assert_eq!(captain.max_hp, 100);
        assert_eq!(captain.attack, 25);
        assert_eq!(captain.defense, 15);
        assert_eq!(captain.speed, 20);
        assert_eq!(captain.aura, Aura::Red);
        assert_eq!(captain.bps, 0.5);
        assert_eq!(captain.skills.len(), 4);
        assert_eq!(captain.saga, "east_blue");
        assert_eq!(captain.arc, "romance_dawn");
    }
}
