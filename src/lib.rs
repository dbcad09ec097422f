//! Grand Line Idle - Idle Collector Economy Core
//!
//! The economy and progression rules of an idle pirate collector: passive
//! berry accrual, time-gated chest rewards, weighted-random recruitment
//! draws, and cost-scaled leveling. This library holds all decision logic;
//! presentation and persistence transports consume its state snapshots and
//! events.

pub mod achievements;
pub mod build_info;
pub mod character;
pub mod constants;
pub mod cooldown;
pub mod economy;
pub mod errors;
pub mod rarity;
pub mod sagas;
pub mod save_manager;

pub use character::{Character, Skill, SkillKind};
pub use constants::TICK_INTERVAL_MS;
pub use cooldown::CooldownGate;
pub use economy::{accrual_tick, draw, level_up, open_chest, set_crew};
pub use economy::{EconomyEvent, EconomyState, TickReport};
pub use errors::TransactionError;
pub use rarity::Rarity;
pub use save_manager::SaveManager;
