//! Vote penalty counter
//!
//! One counter per validator for the current slash window. An absent
//! counter reads as all zeros.

use serde::{Deserialize, Serialize};

/// Outcome of one vote period for one validator, as classified by the tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOutcome {
    Valid,
    Miss,
    Abstain,
}

/// Per-validator tallies for the current window.
///
/// The three counts need not sum to the periods elapsed. A validator may
/// join mid-window, and administrative overwrites can seed any state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyCounter {
    pub valid_attempts: u64,
    pub miss_attempts: u64,
    pub abstain_attempts: u64,
}

impl PenaltyCounter {
    pub fn new(valid_attempts: u64, miss_attempts: u64, abstain_attempts: u64) -> Self {
        Self {
            valid_attempts,
            miss_attempts,
            abstain_attempts,
        }
    }

    /// No classification recorded since the last reset.
    pub fn is_zero(&self) -> bool {
        self.valid_attempts == 0 && self.miss_attempts == 0 && self.abstain_attempts == 0
    }

    pub fn record(&mut self, outcome: VoteOutcome) {
        let field = match outcome {
            VoteOutcome::Valid => &mut self.valid_attempts,
            VoteOutcome::Miss => &mut self.miss_attempts,
            VoteOutcome::Abstain => &mut self.abstain_attempts,
        };
        *field = field.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        self.valid_attempts
            .saturating_add(self.miss_attempts)
            .saturating_add(self.abstain_attempts)
    }
}
