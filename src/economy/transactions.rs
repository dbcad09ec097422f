//! Player-visible economy transactions.
//!
//! Every function either fully commits and returns an [`EconomyEvent`], or
//! fails with a [`TransactionError`] having changed nothing. All checks run
//! before the first mutation; there is no partial effect to roll back.

use rand::Rng;

use crate::character::generation::generate_recruit;
use crate::character::progression::{apply_level_up, level_up_cost};
use crate::constants::*;
use crate::economy::events::EconomyEvent;
use crate::economy::state::EconomyState;
use crate::errors::TransactionError;

/// Opens the treasure chest, crediting `100 * chest_tier` berries.
///
/// Fails with `NotReady` inside the 60-second window; success restarts it.
pub fn open_chest(state: &mut EconomyState, now_ms: i64) -> Result<EconomyEvent, TransactionError> {
    if !state.chest_gate.is_ready(now_ms, CHEST_COOLDOWN_MS) {
        return Err(TransactionError::NotReady {
            remaining_ms: state.chest_gate.remaining_ms(now_ms, CHEST_COOLDOWN_MS),
        });
    }

    let reward = state.chest_reward();
    state.berries += reward;
    state.chest_gate.trigger(now_ms);

    Ok(EconomyEvent::ChestOpened {
        reward,
        chest_tier: state.chest_tier,
        message: format!("+{} berries!", reward as u64),
    })
}

/// Draws a new recruit from a weighted sample in `[0, 100)`.
///
/// A paid draw charges [`DRAW_COST_DIAMONDS`] and ignores the free-draw
/// gate; a free draw charges nothing, requires the gate open, and restarts
/// it. Duplicates never fail: every draw is an independent roster entry.
pub fn draw(
    state: &mut EconomyState,
    now_ms: i64,
    sample: f64,
    is_free: bool,
    rng: &mut impl Rng,
) -> Result<EconomyEvent, TransactionError> {
    if !is_free && state.diamonds < DRAW_COST_DIAMONDS {
        return Err(TransactionError::InsufficientFunds {
            needed: DRAW_COST_DIAMONDS as u64,
            available: state.diamonds as u64,
        });
    }
    if is_free && !state.free_draw_gate.is_ready(now_ms, FREE_DRAW_COOLDOWN_MS) {
        return Err(TransactionError::NotReady {
            remaining_ms: state
                .free_draw_gate
                .remaining_ms(now_ms, FREE_DRAW_COOLDOWN_MS),
        });
    }

    let recruit = generate_recruit(sample, rng);
    if is_free {
        state.free_draw_gate.trigger(now_ms);
    } else {
        state.diamonds -= DRAW_COST_DIAMONDS;
    }
    state.insert_character(recruit.clone());

    Ok(EconomyEvent::Recruited {
        message: format!("New recruit: {} ({})!", recruit.name, recruit.rarity.name()),
        character: recruit,
        free: is_free,
    })
}

/// Toggles a character into or out of the crew.
///
/// Adding beyond [`MAX_CREW_SIZE`] fails with `CrewFull`. Re-adding a member
/// already aboard, or removing one already ashore, is a no-op, not an error.
pub fn set_crew(
    state: &mut EconomyState,
    id: &str,
    selected: bool,
) -> Result<EconomyEvent, TransactionError> {
    let name = match state.character(id) {
        Some(character) => character.name.clone(),
        None => {
            return Err(TransactionError::UnknownCharacter { id: id.to_string() });
        }
    };

    let aboard = state.is_in_crew(id);
    let changed;
    let message;
    if selected {
        if aboard {
            changed = false;
            message = format!("{} is already in the crew", name);
        } else {
            if state.crew.len() >= MAX_CREW_SIZE {
                return Err(TransactionError::CrewFull);
            }
            state.crew.push(id.to_string());
            changed = true;
            message = format!("{} joined the crew", name);
        }
    } else if aboard {
        state.crew.retain(|member| member != id);
        changed = true;
        message = format!("{} left the crew", name);
    } else {
        changed = false;
        message = format!("{} is not in the crew", name);
    }

    Ok(EconomyEvent::CrewUpdated {
        id: id.to_string(),
        selected,
        changed,
        message,
    })
}

/// Buys `levels` levels for a character.
///
/// Checks funds, then the tier cap, then charges and applies. The charge is
/// `levels * 100 * current_level` for the levels *requested*, even when the
/// cap clamps how many are granted.
pub fn level_up(
    state: &mut EconomyState,
    id: &str,
    levels: u32,
) -> Result<EconomyEvent, TransactionError> {
    let Some(character) = state.characters.get_mut(id) else {
        return Err(TransactionError::UnknownCharacter { id: id.to_string() });
    };

    let cost = level_up_cost(character, levels);
    if state.berries < cost as f64 {
        return Err(TransactionError::InsufficientFunds {
            needed: cost,
            available: state.berries as u64,
        });
    }

    let outcome = apply_level_up(character, levels)?;
    let name = character.name.clone();
    state.berries -= cost as f64;

    Ok(EconomyEvent::LeveledUp {
        id: id.to_string(),
        levels_requested: outcome.levels_requested,
        levels_granted: outcome.levels_granted,
        cost,
        new_level: outcome.new_level,
        message: format!(
            "{} leveled up {} time(s) to level {}!",
            name, outcome.levels_requested, outcome.new_level
        ),
    })
}
