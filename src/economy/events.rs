//! Success events produced by economy transactions.
//!
//! Each event carries the structured outcome plus a human-readable message.
//! The presentation layer maps these to toasts and log lines; the economy
//! core never touches UI types directly. Failure messages come from
//! [`crate::errors::TransactionError`]'s Display impl.

use crate::character::types::Character;

#[derive(Debug, Clone)]
pub enum EconomyEvent {
    /// The treasure chest paid out.
    ChestOpened {
        reward: f64,
        chest_tier: u32,
        message: String,
    },

    /// A draw produced a new recruit (already inserted into the roster).
    Recruited {
        character: Character,
        free: bool,
        message: String,
    },

    /// A crew toggle was processed. `changed` is false for no-op toggles
    /// (adding a member already aboard, removing one already ashore).
    CrewUpdated {
        id: String,
        selected: bool,
        changed: bool,
        message: String,
    },

    /// A level purchase went through.
    LeveledUp {
        id: String,
        levels_requested: u32,
        levels_granted: u32,
        cost: u64,
        new_level: u32,
        message: String,
    },
}

impl EconomyEvent {
    /// The notification text for this event.
    pub fn message(&self) -> &str {
        match self {
            EconomyEvent::ChestOpened { message, .. }
            | EconomyEvent::Recruited { message, .. }
            | EconomyEvent::CrewUpdated { message, .. }
            | EconomyEvent::LeveledUp { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_accessor_reads_any_variant() {
        let event = EconomyEvent::ChestOpened {
            reward: 100.0,
            chest_tier: 1,
            message: "+100 berries!".to_string(),
        };
        assert_eq!(event.message(), "+100 berries!");

        let event = EconomyEvent::CrewUpdated {
            id: "luffy_east_blue".to_string(),
            selected: false,
            changed: true,
            message: "Monkey D. Luffy left the crew".to_string(),
        };
        assert_eq!(event.message(), "Monkey D. Luffy left the crew");
    }
}
