//! The economy aggregate root.
//!
//! A single `EconomyState` owns every player-visible balance and collection.
//! It is constructed by the composition root and passed by reference to
//! whoever needs it; there is no process-wide singleton. All mutation goes
//! through the transaction functions in [`crate::economy::transactions`] and
//! the accrual tick, serialized on one thread.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::achievements::AchievementRecord;
use crate::character::generation::starting_captain;
use crate::character::types::Character;
use crate::constants::*;
use crate::cooldown::CooldownGate;
use crate::sagas::get_all_sagas;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyState {
    /// Passive currency balance. Fractional because income rates are.
    pub berries: f64,
    /// Passive income rate. Invariant: always equals the sum of all owned
    /// characters' `bps` contributions.
    pub bps: f64,
    /// Premium currency balance.
    pub diamonds: u32,
    /// Owned characters keyed by instance id.
    pub characters: HashMap<String, Character>,
    /// Selected crew member ids, insertion order, at most [`MAX_CREW_SIZE`].
    pub crew: Vec<String>,
    /// Treasure chest tier; scales the chest reward. Never decreases.
    pub chest_tier: u32,
    /// Gate for the treasure chest (interval [`CHEST_COOLDOWN_MS`]).
    pub chest_gate: CooldownGate,
    /// Gate for the free draw (interval [`FREE_DRAW_COOLDOWN_MS`]).
    pub free_draw_gate: CooldownGate,
    pub unlocked_sagas: Vec<String>,
    pub unlocked_arcs: Vec<String>,
    /// Achievement records. Placeholder: persisted but never evaluated here.
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self::new()
    }
}

impl EconomyState {
    /// Creates the new-game state: the starting captain aboard, a handful of
    /// diamonds, and only the opening arc unlocked.
    pub fn new() -> Self {
        let captain = starting_captain();
        let captain_id = captain.id.clone();
        let bps = captain.bps;

        let mut characters = HashMap::new();
        characters.insert(captain_id.clone(), captain);

        let unlocked_sagas = vec!["east_blue".to_string()];
        let unlocked_arcs: Vec<String> = get_all_sagas()
            .into_iter()
            .flat_map(|saga| saga.arcs)
            .filter(|arc| arc.open_at_start)
            .map(|arc| arc.id.to_string())
            .collect();

        Self {
            berries: STARTING_BERRIES,
            bps,
            diamonds: STARTING_DIAMONDS,
            characters,
            crew: vec![captain_id],
            chest_tier: 1,
            chest_gate: CooldownGate::new(),
            free_draw_gate: CooldownGate::new(),
            unlocked_sagas,
            unlocked_arcs,
            achievements: Vec::new(),
        }
    }

    /// Read access to a character by id.
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Adds a freshly drawn character, keeping the income-rate invariant:
    /// the rate is bumped by exactly the newcomer's contribution.
    pub fn insert_character(&mut self, character: Character) {
        self.bps += character.bps;
        self.characters.insert(character.id.clone(), character);
    }

    /// Sum of all owned characters' income contributions. Equals `bps` at
    /// all times; exposed so tests and load paths can check the invariant.
    pub fn total_character_bps(&self) -> f64 {
        self.characters.values().map(|c| c.bps).sum()
    }

    /// Berry reward the chest pays at its current tier.
    pub fn chest_reward(&self) -> f64 {
        CHEST_BASE_REWARD * self.chest_tier as f64
    }

    pub fn is_in_crew(&self, id: &str) -> bool {
        self.crew.iter().any(|member| member == id)
    }

    /// Crew members in selection order. Ids always resolve; a missing entry
    /// would mean the crew invariant was broken elsewhere.
    pub fn crew_members(&self) -> Vec<&Character> {
        self.crew
            .iter()
            .filter_map(|id| self.characters.get(id))
            .collect()
    }

    pub fn is_saga_unlocked(&self, id: &str) -> bool {
        self.unlocked_sagas.iter().any(|saga| saga == id)
    }

    pub fn is_arc_unlocked(&self, id: &str) -> bool {
        self.unlocked_arcs.iter().any(|arc| arc == id)
    }

    pub fn unlock_saga(&mut self, id: &str) {
        if !self.is_saga_unlocked(id) {
            self.unlocked_sagas.push(id.to_string());
            self.unlocked_sagas.sort();
        }
    }

    pub fn unlock_arc(&mut self, id: &str) {
        if !self.is_arc_unlocked(id) {
            self.unlocked_arcs.push(id.to_string());
            self.unlocked_arcs.sort();
        }
    }
}
