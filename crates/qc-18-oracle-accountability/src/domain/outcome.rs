//! Window pass outcome
//!
//! Record of what one slash-and-reset pass decided, in processing order.

use crate::domain::PenaltyCounter;
use serde::{Deserialize, Serialize};
use shared_types::{Dec, ValidatorAddress};

/// Why a counter holder was left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// Counter had no classifications this window
    NoActivity,
    /// Staking module has no such validator
    NotFound,
    /// Unbonded or unbonding
    NotBonded,
    AlreadyJailed,
}

impl SkipReason {
    /// Label used for metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoActivity => "no_activity",
            Self::NotFound => "not_found",
            Self::NotBonded => "not_bonded",
            Self::AlreadyJailed => "already_jailed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedValidator {
    pub address: ValidatorAddress,
    pub reason: SkipReason,
}

/// A validator that failed the window and was slashed and jailed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorPenalized {
    pub address: ValidatorAddress,
    pub counter: PenaltyCounter,
    pub tokens_before: u128,
    pub tokens_after: u128,
    pub slash_fraction: Dec,
}

impl ValidatorPenalized {
    pub fn slashed_amount(&self) -> u128 {
        self.tokens_before - self.tokens_after
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOutcome {
    /// Block height that closed the window
    pub height: u64,
    pub periods_per_window: u64,
    pub min_valid_periods: u64,
    /// Counters examined (including skipped ones)
    pub processed: usize,
    pub penalized: Vec<ValidatorPenalized>,
    pub skipped: Vec<SkippedValidator>,
}

impl WindowOutcome {
    pub fn new(height: u64, periods_per_window: u64, min_valid_periods: u64) -> Self {
        Self {
            height,
            periods_per_window,
            min_valid_periods,
            processed: 0,
            penalized: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_penalized(&self, address: &ValidatorAddress) -> bool {
        self.penalized.iter().any(|p| &p.address == address)
    }

    pub fn skip_reason(&self, address: &ValidatorAddress) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|s| &s.address == address)
            .map(|s| s.reason)
    }

    pub fn total_slashed(&self) -> u128 {
        self.penalized
            .iter()
            .map(ValidatorPenalized::slashed_amount)
            .fold(0u128, u128::saturating_add)
    }
}
