//! # Penalty Counter Store
//!
//! Owns the per-validator vote penalty counters on top of a `StateStore`.
//!
//! ## Layout
//!
//! ```text
//! key   = 0x03 || len(address) || address
//! value = bincode(PenaltyCounter)
//! ```
//!
//! The length prefix keeps keys of different address widths from sharing a
//! prefix. Iteration always returns ascending address order.

use crate::domain::{PenaltyCounter, VoteOutcome};
use crate::error::{AccountabilityResult, StoreError};
use crate::ports::StateStore;
use shared_types::ValidatorAddress;
use std::sync::Arc;
use tracing::debug;

/// Store prefix for vote penalty counters.
pub const VOTE_PENALTY_COUNTER_PREFIX: u8 = 0x03;

/// Store key for a validator's counter.
pub fn counter_key(address: &ValidatorAddress) -> Vec<u8> {
    let bytes = address.as_bytes();
    let mut key = Vec::with_capacity(2 + bytes.len());
    key.push(VOTE_PENALTY_COUNTER_PREFIX);
    key.push(bytes.len() as u8);
    key.extend_from_slice(bytes);
    key
}

/// Recover the validator address from a counter key.
pub fn address_from_key(key: &[u8]) -> Result<ValidatorAddress, StoreError> {
    let corrupted = |reason: &str| StoreError::Corrupted {
        key: hex::encode(key),
        reason: reason.to_string(),
    };

    match key {
        [VOTE_PENALTY_COUNTER_PREFIX, len, rest @ ..] if *len as usize == rest.len() => {
            ValidatorAddress::from_slice(rest).map_err(|e| corrupted(&e.to_string()))
        }
        [VOTE_PENALTY_COUNTER_PREFIX, ..] => Err(corrupted("address length mismatch")),
        _ => Err(corrupted("wrong key prefix")),
    }
}

fn encode_counter(counter: &PenaltyCounter) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(counter).map_err(|e| StoreError::Encoding(e.to_string()))
}

fn decode_counter(key: &[u8], value: &[u8]) -> Result<PenaltyCounter, StoreError> {
    bincode::deserialize(value).map_err(|e| StoreError::Corrupted {
        key: hex::encode(key),
        reason: e.to_string(),
    })
}

pub struct PenaltyCounterStore<S: StateStore> {
    store: Arc<S>,
}

impl<S: StateStore> PenaltyCounterStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Counter for `address`, all zeros if absent.
    pub fn get(&self, address: &ValidatorAddress) -> AccountabilityResult<PenaltyCounter> {
        let key = counter_key(address);
        match self.store.get(&key)? {
            Some(value) => Ok(decode_counter(&key, &value)?),
            None => Ok(PenaltyCounter::default()),
        }
    }

    /// Overwrite all three fields. Administrative/test surface.
    pub fn set(
        &self,
        address: &ValidatorAddress,
        valid_attempts: u64,
        miss_attempts: u64,
        abstain_attempts: u64,
    ) -> AccountabilityResult<()> {
        let counter = PenaltyCounter::new(valid_attempts, miss_attempts, abstain_attempts);
        self.put(address, &counter)
    }

    pub fn increment(
        &self,
        address: &ValidatorAddress,
        outcome: VoteOutcome,
    ) -> AccountabilityResult<()> {
        let mut counter = self.get(address)?;
        counter.record(outcome);
        self.put(address, &counter)
    }

    pub fn increment_valid(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.increment(address, VoteOutcome::Valid)
    }

    pub fn increment_miss(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.increment(address, VoteOutcome::Miss)
    }

    pub fn increment_abstain(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.increment(address, VoteOutcome::Abstain)
    }

    pub fn delete(&self, address: &ValidatorAddress) -> AccountabilityResult<()> {
        self.store.delete(&counter_key(address))?;
        Ok(())
    }

    /// Every stored counter, sorted by address.
    pub fn iterate(&self) -> AccountabilityResult<Vec<(ValidatorAddress, PenaltyCounter)>> {
        let mut entries = self
            .store
            .prefix_scan(&[VOTE_PENALTY_COUNTER_PREFIX])?
            .into_iter()
            .map(|(key, value)| {
                let address = address_from_key(&key)?;
                let counter = decode_counter(&key, &value)?;
                Ok((address, counter))
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        // Ascending address order regardless of the backend's scan order
        entries.sort_by_key(|(address, _)| *address);
        Ok(entries)
    }

    /// Clear every stored counter.
    ///
    /// Entries are removed rather than zeroed; a removed entry reads back as
    /// the zero counter.
    pub fn reset_all(&self) -> AccountabilityResult<usize> {
        let keys: Vec<Vec<u8>> = self
            .store
            .prefix_scan(&[VOTE_PENALTY_COUNTER_PREFIX])?
            .into_iter()
            .map(|(key, _)| key)
            .collect();

        for key in &keys {
            self.store.delete(key)?;
        }

        debug!("[qc-18] Reset {} vote penalty counters", keys.len());
        Ok(keys.len())
    }

    /// Genesis export, ascending address order.
    pub fn export_counters(&self) -> AccountabilityResult<Vec<(ValidatorAddress, PenaltyCounter)>> {
        self.iterate()
    }

    /// Genesis import. Overwrites existing entries for the same address.
    pub fn import_counters(
        &self,
        entries: &[(ValidatorAddress, PenaltyCounter)],
    ) -> AccountabilityResult<()> {
        for (address, counter) in entries {
            self.put(address, counter)?;
        }
        Ok(())
    }

    fn put(&self, address: &ValidatorAddress, counter: &PenaltyCounter) -> AccountabilityResult<()> {
        self.store
            .set(counter_key(address), encode_counter(counter)?)?;
        Ok(())
    }
}
