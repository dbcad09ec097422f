//! Economy aggregate: state, transactions, events, and the accrual tick.

pub mod events;
pub mod state;
pub mod tick;
pub mod transactions;

pub use events::EconomyEvent;
pub use state::EconomyState;
pub use tick::{accrual_tick, TickReport};
pub use transactions::{draw, level_up, open_chest, set_crew};
