//! Outgoing events for Oracle Accountability subsystem
//!
//! Emitted in processing order so every replica produces the same event log.

use crate::domain::{ValidatorPenalized, WindowOutcome};
use serde::{Deserialize, Serialize};

/// Event emitted when a slash window closes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowClosedEvent {
    pub height: u64,
    pub periods_per_window: u64,
    pub min_valid_periods: u64,
    pub counters_processed: usize,
    pub validators_penalized: usize,
}

impl From<&WindowOutcome> for WindowClosedEvent {
    fn from(outcome: &WindowOutcome) -> Self {
        Self {
            height: outcome.height,
            periods_per_window: outcome.periods_per_window,
            min_valid_periods: outcome.min_valid_periods,
            counters_processed: outcome.processed,
            validators_penalized: outcome.penalized.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleEvent {
    /// Validator slashed and jailed for insufficient valid votes
    ValidatorPenalized(ValidatorPenalized),
    WindowClosed(WindowClosedEvent),
}

impl OracleEvent {
    /// Events for one window pass: penalties in order, then the close marker.
    pub fn from_outcome(outcome: &WindowOutcome) -> Vec<OracleEvent> {
        outcome
            .penalized
            .iter()
            .cloned()
            .map(OracleEvent::ValidatorPenalized)
            .chain(std::iter::once(OracleEvent::WindowClosed(outcome.into())))
            .collect()
    }
}
