//! Driving ports (Inbound API)

use crate::domain::{PenaltyCounter, WindowOutcome};
use crate::error::AccountabilityResult;
use shared_types::ValidatorAddress;

/// Primary Oracle Accountability API
///
/// Called by the vote tally once per validator per vote period, and by the
/// block-processing loop at the end of every block.
pub trait OracleAccountabilityApi {
    /// Record an accepted vote for the current period
    fn increment_valid(&self, address: &ValidatorAddress) -> AccountabilityResult<()>;

    /// Record a missing or rejected vote for the current period
    fn increment_miss(&self, address: &ValidatorAddress) -> AccountabilityResult<()>;

    /// Record an explicit abstention for the current period
    fn increment_abstain(&self, address: &ValidatorAddress) -> AccountabilityResult<()>;

    /// Current window counter, zero if none recorded
    fn vote_penalty_counter(&self, address: &ValidatorAddress)
        -> AccountabilityResult<PenaltyCounter>;

    /// Run the slash-and-reset pass if `height` closes a slash window
    ///
    /// Returns `None` for every other height.
    fn end_block(&self, height: u64) -> AccountabilityResult<Option<WindowOutcome>>;
}
