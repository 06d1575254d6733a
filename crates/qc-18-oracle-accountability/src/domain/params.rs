//! Governance-controlled oracle parameters
//!
//! Validated when governance sets them, so the slash engine never sees a
//! malformed set.

use crate::error::ParamsError;
use serde::{Deserialize, Serialize};
use shared_types::Dec;

/// Default blocks per vote period.
pub const DEFAULT_VOTE_PERIOD: u64 = 5;

/// Default blocks per slash window (one week of 6 second blocks).
pub const DEFAULT_SLASH_WINDOW: u64 = 100_800;

/// Oracle module parameters relevant to vote accountability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleParams {
    /// Blocks per vote period
    pub vote_period: u64,
    /// Blocks per slash window
    pub slash_window: u64,
    /// Fraction of periods in a window that must be valid votes
    pub min_valid_per_window: Dec,
    /// Fraction of bonded stake removed on a failed window
    pub slash_fraction: Dec,
}

impl Default for OracleParams {
    fn default() -> Self {
        Self {
            vote_period: DEFAULT_VOTE_PERIOD,
            slash_window: DEFAULT_SLASH_WINDOW,
            // 5%
            min_valid_per_window: Dec::from_raw(50_000_000_000_000_000),
            // 0.01%
            slash_fraction: Dec::from_raw(100_000_000_000_000),
        }
    }
}

impl OracleParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.vote_period == 0 {
            return Err(ParamsError::ZeroVotePeriod);
        }
        if self.slash_window == 0 {
            return Err(ParamsError::ZeroSlashWindow);
        }
        if self.slash_window < self.vote_period {
            return Err(ParamsError::WindowShorterThanPeriod {
                slash_window: self.slash_window,
                vote_period: self.vote_period,
            });
        }
        if !self.min_valid_per_window.le_one() {
            return Err(ParamsError::MinValidOutOfRange(self.min_valid_per_window));
        }
        if !self.slash_fraction.le_one() {
            return Err(ParamsError::SlashFractionOutOfRange(self.slash_fraction));
        }
        Ok(())
    }
}
