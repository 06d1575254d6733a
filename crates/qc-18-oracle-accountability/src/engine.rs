//! # Slash-and-Reset Engine
//!
//! Runs once per slash window boundary, inside block finalization.
//!
//! ## Algorithm
//!
//! For every address holding a counter, in ascending address order:
//!
//! 1. Skip if the counter recorded nothing this window.
//! 2. Look the validator up. Unknown, not bonded or already jailed: skip.
//! 3. If `valid_attempts < min_valid_periods`, reduce stake by
//!    `slash_fraction` and jail. Always both, never one alone.
//!
//! Then clear every counter, skipped ones included.
//!
//! Any error aborts the pass and must fail the block. There is no partial
//! application: the caller commits the block's state atomically or not at all.

use crate::config::AccountabilityConfig;
use crate::counters::PenaltyCounterStore;
use crate::domain::{
    OracleParams, SkipReason, SkippedValidator, ValidatorPenalized, WindowAccountant,
    WindowOutcome,
};
use crate::error::{AccountabilityError, AccountabilityResult};
use crate::metrics;
use crate::ports::{StateStore, ValidatorSetKeeper};
use shared_types::ValidatorAddress;
use tracing::{debug, error, info, warn};

pub struct SlashAndResetEngine<'a, S: StateStore, K: ValidatorSetKeeper> {
    counters: &'a PenaltyCounterStore<S>,
    keeper: &'a K,
    config: &'a AccountabilityConfig,
}

impl<'a, S: StateStore, K: ValidatorSetKeeper> SlashAndResetEngine<'a, S, K> {
    pub fn new(
        counters: &'a PenaltyCounterStore<S>,
        keeper: &'a K,
        config: &'a AccountabilityConfig,
    ) -> Self {
        Self {
            counters,
            keeper,
            config,
        }
    }

    /// Evaluate the closing window under `params`, penalize, reset.
    pub fn run(&self, height: u64, params: &OracleParams) -> AccountabilityResult<WindowOutcome> {
        let accountant = WindowAccountant::new(params)?;
        let mut outcome = WindowOutcome::new(
            height,
            accountant.periods_per_window(),
            accountant.min_valid_periods(),
        );

        for (address, counter) in self.counters.iterate()? {
            outcome.processed += 1;

            if counter.is_zero() {
                self.skip(&mut outcome, address, SkipReason::NoActivity);
                continue;
            }

            // Re-read every time; an earlier slash in this pass may have
            // changed the collaborator's state.
            let view = match self.keeper.lookup(&address)? {
                Some(view) => view,
                None => {
                    warn!(
                        "[qc-18] Counter holder {} unknown to staking module, skipping",
                        address
                    );
                    self.skip(&mut outcome, address, SkipReason::NotFound);
                    continue;
                }
            };

            if !view.is_bonded() {
                self.skip(&mut outcome, address, SkipReason::NotBonded);
                continue;
            }
            if view.jailed {
                self.skip(&mut outcome, address, SkipReason::AlreadyJailed);
                continue;
            }

            if !accountant.fails_window(counter.valid_attempts) {
                continue;
            }

            let tokens_before = view.tokens;
            let tokens_after = self.keeper.reduce_stake(&address, params.slash_fraction)?;
            if tokens_after > tokens_before {
                error!(
                    "[qc-18] FATAL: stake grew on slash for {}: {} -> {}",
                    address, tokens_before, tokens_after
                );
                return Err(AccountabilityError::StakeInvariant {
                    address,
                    before: tokens_before,
                    after: tokens_after,
                });
            }
            self.keeper.jail(&address)?;

            warn!(
                "[qc-18] Validator {} slashed and jailed: valid {} < required {} (miss {}, abstain {}), tokens {} -> {}",
                address,
                counter.valid_attempts,
                accountant.min_valid_periods(),
                counter.miss_attempts,
                counter.abstain_attempts,
                tokens_before,
                tokens_after
            );
            metrics::record_validator_penalized(tokens_before - tokens_after);

            outcome.penalized.push(ValidatorPenalized {
                address,
                counter,
                tokens_before,
                tokens_after,
                slash_fraction: params.slash_fraction,
            });
        }

        self.counters.reset_all()?;
        metrics::record_window_pass();

        info!(
            "[qc-18] Slash window closed at height {}: {} counters, {} penalized, {} skipped",
            height,
            outcome.processed,
            outcome.penalized.len(),
            outcome.skipped.len()
        );

        Ok(outcome)
    }

    fn skip(&self, outcome: &mut WindowOutcome, address: ValidatorAddress, reason: SkipReason) {
        if self.config.log_skipped_validators {
            info!("[qc-18] Skipping {}: {:?}", address, reason);
        } else {
            debug!("[qc-18] Skipping {}: {:?}", address, reason);
        }
        metrics::record_validator_skipped(reason.as_str());
        outcome.skipped.push(SkippedValidator { address, reason });
    }
}
