//! Reusable cooldown gate for time-limited actions.
//!
//! A gate remembers only the last trigger timestamp (epoch milliseconds,
//! 0 meaning "never triggered" — any realistic epoch clock is already past
//! the interval, so a fresh gate is immediately available). Readiness is a
//! pure function of the clock: nothing transitions the gate back to ready
//! except wall time passing, and waiting longer than the interval earns no
//! credit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownGate {
    pub last_trigger_ms: i64,
}

impl CooldownGate {
    pub fn new() -> Self {
        Self { last_trigger_ms: 0 }
    }

    /// True when strictly more than `interval_ms` has elapsed since the last
    /// trigger. Exactly at the boundary is still cooling down.
    pub fn is_ready(&self, now_ms: i64, interval_ms: i64) -> bool {
        now_ms - self.last_trigger_ms > interval_ms
    }

    /// Records a trigger at `now_ms`, starting the next cooldown window.
    pub fn trigger(&mut self, now_ms: i64) {
        self.last_trigger_ms = now_ms;
    }

    /// Milliseconds until the gate reopens, 0 when ready (display helper).
    pub fn remaining_ms(&self, now_ms: i64, interval_ms: i64) -> i64 {
        (self.last_trigger_ms + interval_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: i64 = 60_000;
    /// A realistic wall-clock instant; fresh gates are judged against this.
    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_fresh_gate_is_immediately_ready() {
        let gate = CooldownGate::new();
        assert_eq!(gate.last_trigger_ms, 0);
        assert!(gate.is_ready(NOW, INTERVAL));
    }

    #[test]
    fn test_boundary_is_strict() {
        let mut gate = CooldownGate::new();
        gate.trigger(NOW);
        // Exactly interval_ms elapsed: still not ready
        assert!(!gate.is_ready(NOW + INTERVAL, INTERVAL));
        // One millisecond past: ready
        assert!(gate.is_ready(NOW + INTERVAL + 1, INTERVAL));
    }

    #[test]
    fn test_trigger_restarts_window() {
        let mut gate = CooldownGate::new();
        gate.trigger(NOW);
        assert!(!gate.is_ready(NOW + 1_000, INTERVAL));
        assert!(gate.is_ready(NOW + INTERVAL + 1, INTERVAL));
        gate.trigger(NOW + 200_000);
        assert!(!gate.is_ready(NOW + 200_001, INTERVAL));
    }

    #[test]
    fn test_remaining_ms_counts_down_to_zero() {
        let mut gate = CooldownGate::new();
        gate.trigger(NOW);
        assert_eq!(gate.remaining_ms(NOW, INTERVAL), INTERVAL);
        assert_eq!(gate.remaining_ms(NOW + 30_000, INTERVAL), 30_000);
        assert_eq!(gate.remaining_ms(NOW + INTERVAL, INTERVAL), 0);
        assert_eq!(gate.remaining_ms(NOW + INTERVAL + 500, INTERVAL), 0);
    }
}
