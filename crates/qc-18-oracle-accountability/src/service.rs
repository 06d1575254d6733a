//! Oracle Accountability Service
//!
//! Facade the block-processing loop and the vote tally talk to. Owns the
//! counter store and reads params fresh from the provider on every call.

use crate::config::AccountabilityConfig;
use crate::counters::PenaltyCounterStore;
use crate::domain::{OracleParams, PenaltyCounter, WindowAccountant, WindowOutcome};
use crate::engine::SlashAndResetEngine;
use crate::error::AccountabilityResult;
use crate::events::OracleEvent;
use crate::ports::{OracleAccountabilityApi, ParamsProvider, StateStore, ValidatorSetKeeper};
use parking_lot::Mutex;
use shared_types::{Dec, ValidatorAddress};
use std::sync::Arc;

/// Dependencies for OracleAccountabilityService
pub struct AccountabilityDependencies<S, K, P> {
    pub store: Arc<S>,
    pub keeper: Arc<K>,
    pub params: Arc<P>,
    pub config: AccountabilityConfig,
}

pub struct OracleAccountabilityService<S, K, P>
where
    S: StateStore,
    K: ValidatorSetKeeper,
    P: ParamsProvider,
{
    counters: PenaltyCounterStore<S>,
    keeper: Arc<K>,
    params: Arc<P>,
    config: AccountabilityConfig,
    pending_events: Mutex<Vec<OracleEvent>>,
}

impl<S, K, P> OracleAccountabilityService<S, K, P>
where
    S: StateStore,
    K: ValidatorSetKeeper,
    P: ParamsProvider,
{
    pub fn new(deps: AccountabilityDependencies<S, K, P>) -> Self {
        Self {
            counters: PenaltyCounterStore::new(deps.store),
            keeper: deps.keeper,
            params: deps.params,
            config: deps.config,
            pending_events: Mutex::new(Vec::new()),
        }
    }

    // === PARAMETER ACCESSORS ===

    pub fn params(&self) -> OracleParams {
        self.params.params()
    }

    pub fn vote_period(&self) -> u64 {
        self.params.params().vote_period
    }

    pub fn slash_window(&self) -> u64 {
        self.params.params().slash_window
    }

    pub fn min_valid_per_window(&self) -> Dec {
        self.params.params().min_valid_per_window
    }

    pub fn slash_fraction(&self) -> Dec {
        self.params.params().slash_fraction
    }

    /// Accountant for the params currently in force.
    pub fn window_accountant(&self) -> AccountabilityResult<WindowAccountant> {
        Ok(WindowAccountant::new(&self.params.params())?)
    }

    // === COUNTER ADMINISTRATION ===

    /// Overwrite a counter. Administrative/test surface.
    pub fn set_vote_penalty_counter(
        &self,
        address: &ValidatorAddress,
        valid_attempts: u64,
        miss_attempts: u64,
        abstain_attempts: u64,
    ) -> AccountabilityResult<()> {
        self.counters
            .set(address, valid_attempts, miss_attempts, abstain_attempts)
    }

    pub fn delete_vote_penalty_counter(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.counters.delete(address)
    }

    pub fn reset_vote_penalty_counters(&self) -> AccountabilityResult<usize> {
        self.counters.reset_all()
    }

    pub fn export_counters(&self) -> AccountabilityResult<Vec<(ValidatorAddress, PenaltyCounter)>> {
        self.counters.export_counters()
    }

    pub fn import_counters(
        &self,
        entries: &[(ValidatorAddress, PenaltyCounter)],
    ) -> AccountabilityResult<()> {
        self.counters.import_counters(entries)
    }

    // === WINDOW PASS ===

    /// Run the slash-and-reset pass unconditionally.
    ///
    /// The caller guarantees this happens exactly once per window boundary.
    pub fn slash_and_reset_counters(&self, height: u64) -> AccountabilityResult<WindowOutcome> {
        let params = self.params.params();
        let outcome = SlashAndResetEngine::new(&self.counters, self.keeper.as_ref(), &self.config)
            .run(height, &params)?;

        if self.config.emit_events {
            self.pending_events
                .lock()
                .extend(OracleEvent::from_outcome(&outcome));
        }
        Ok(outcome)
    }

    /// Take and clear pending events
    pub fn take_events(&self) -> Vec<OracleEvent> {
        std::mem::take(&mut *self.pending_events.lock())
    }
}

impl<S, K, P> OracleAccountabilityApi for OracleAccountabilityService<S, K, P>
where
    S: StateStore,
    K: ValidatorSetKeeper,
    P: ParamsProvider,
{
    fn increment_valid(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.counters.increment_valid(address)
    }

    fn increment_miss(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.counters.increment_miss(address)
    }

    fn increment_abstain(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.counters.increment_abstain(address)
    }

    fn vote_penalty_counter(
        &self,
        address: &ValidatorAddress,
    ) -> AccountabilityResult<PenaltyCounter> {
        self.counters.get(address)
    }

    fn end_block(&self, height: u64) -> AccountabilityResult<Option<WindowOutcome>> {
        if !self.window_accountant()?.is_window_boundary(height) {
            return Ok(None);
        }
        self.slash_and_reset_counters(height).map(Some)
    }
}
