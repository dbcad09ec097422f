//! Central tuning constants for the economy core.

// Accrual tick and autosave timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Treasure chest
pub const CHEST_BASE_REWARD: f64 = 100.0;
pub const CHEST_COOLDOWN_MS: i64 = 60_000;

// Recruitment draws
pub const DRAW_COST_DIAMONDS: u32 = 10;
pub const FREE_DRAW_COOLDOWN_MS: i64 = 300_000;
/// Draw samples live in [0, DRAW_SAMPLE_MAX).
pub const DRAW_SAMPLE_MAX: f64 = 100.0;

// Crew selection
pub const MAX_CREW_SIZE: usize = 5;

// Leveling costs: levels * LEVEL_COST_PER_LEVEL * current level
pub const LEVEL_COST_PER_LEVEL: u64 = 100;

// Stat gains per level bought
pub const LEVEL_HP_GAIN: u32 = 10;
pub const LEVEL_ATTACK_GAIN: u32 = 2;
pub const LEVEL_DEFENSE_GAIN: u32 = 1;
pub const LEVEL_SPEED_GAIN: u32 = 1;

// Recruit base stats; each scales linearly with the tier's max level
pub const RECRUIT_BASE_HP: u32 = 50;
pub const RECRUIT_HP_PER_MAX_LEVEL: u32 = 2;
pub const RECRUIT_BASE_ATTACK: u32 = 10;
pub const RECRUIT_BASE_DEFENSE: u32 = 5;
pub const RECRUIT_DEFENSE_DIVISOR: u32 = 2;
pub const RECRUIT_BASE_SPEED: u32 = 15;
pub const RECRUIT_SPEED_DIVISOR: u32 = 3;

// New game balances
pub const STARTING_BERRIES: f64 = 0.0;
pub const STARTING_DIAMONDS: u32 = 50;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x4752414E444C4E31; // "GRANDLN1"
