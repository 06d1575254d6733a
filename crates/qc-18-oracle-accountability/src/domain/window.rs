//! # Window Accountant
//!
//! Derives window-relative quantities from the current oracle params.
//!
//! ## Formulas
//!
//! ```text
//! periods_per_window = floor(slash_window / vote_period)
//! min_valid_periods  = floor(min_valid_per_window * periods_per_window)
//! ```
//!
//! Both are integer/fixed-point only. Build a fresh accountant from the
//! params in force at each window boundary; nothing here is persisted.

use crate::domain::OracleParams;
use crate::error::ParamsError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowAccountant {
    slash_window: u64,
    periods_per_window: u64,
    min_valid_periods: u64,
}

impl WindowAccountant {
    pub fn new(params: &OracleParams) -> Result<Self, ParamsError> {
        params.validate()?;

        // validate() guarantees slash_window >= vote_period > 0
        let periods_per_window = params.slash_window / params.vote_period;
        let min_valid_periods = params
            .min_valid_per_window
            .mul_u64_truncate(periods_per_window)?;

        Ok(Self {
            slash_window: params.slash_window,
            periods_per_window,
            min_valid_periods,
        })
    }

    /// Vote periods per slash window. Never zero.
    pub fn periods_per_window(&self) -> u64 {
        self.periods_per_window
    }

    /// Valid votes a validator needs within one window to escape the slash.
    pub fn min_valid_periods(&self) -> u64 {
        self.min_valid_periods
    }

    /// True when `valid_attempts` falls short of the window threshold.
    pub fn fails_window(&self, valid_attempts: u64) -> bool {
        valid_attempts < self.min_valid_periods
    }

    /// Whether the block at `height` closes a slash window.
    pub fn is_window_boundary(&self, height: u64) -> bool {
        height > 0 && height % self.slash_window == 0
    }
}
