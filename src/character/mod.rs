//! Character data model, draw-engine synthesis, and leveling.

pub mod generation;
pub mod progression;
pub mod types;

pub use generation::{generate_recruit, roll_rarity, starting_captain};
pub use types::{Aura, Character, Skill, SkillKind};
