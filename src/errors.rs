//! Transaction error taxonomy.
//!
//! Every variant is an expected, recoverable, user-facing outcome: the
//! transaction reports it and leaves the aggregate completely unchanged.
//! Display strings double as the notification text for failed transactions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionError {
    /// The action's cooldown window has not elapsed yet.
    #[error("not ready yet ({} s remaining)", (.remaining_ms + 999) / 1000)]
    NotReady { remaining_ms: i64 },

    /// The relevant currency balance is below the required cost.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    /// The character is already at its tier's level cap.
    #[error("maximum level reached")]
    MaxLevelReached,

    /// The crew already holds the maximum number of members.
    #[error("crew is full")]
    CrewFull,

    /// An id-keyed operation referenced a character that is not owned.
    #[error("no such character: {id}")]
    UnknownCharacter { id: String },
}
