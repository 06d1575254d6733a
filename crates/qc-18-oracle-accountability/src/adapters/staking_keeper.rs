//! In-memory staking collaborator
//!
//! Stands in for the staking module in tests and local simulation. Every
//! mutating call is appended to an operation log so callers can check the
//! order in which slashes and jails were issued.

use crate::domain::{BondStatus, ValidatorView};
use crate::error::KeeperError;
use crate::ports::ValidatorSetKeeper;
use parking_lot::RwLock;
use shared_types::{Dec, ValidatorAddress};
use std::collections::BTreeMap;
use tracing::debug;

/// A mutation issued against the staking module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeeperOperation {
    ReduceStake {
        address: ValidatorAddress,
        fraction: Dec,
        tokens_before: u128,
        tokens_after: u128,
    },
    Jail {
        address: ValidatorAddress,
    },
}

#[derive(Debug, Default)]
pub struct InMemoryStakingKeeper {
    validators: RwLock<BTreeMap<ValidatorAddress, ValidatorView>>,
    operations: RwLock<Vec<KeeperOperation>>,
}

impl InMemoryStakingKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with validators.
    pub fn with_validators(views: impl IntoIterator<Item = ValidatorView>) -> Self {
        let keeper = Self::new();
        for view in views {
            keeper.insert(view);
        }
        keeper
    }

    pub fn insert(&self, view: ValidatorView) {
        self.validators.write().insert(view.address, view);
    }

    pub fn get(&self, address: &ValidatorAddress) -> Option<ValidatorView> {
        self.validators.read().get(address).cloned()
    }

    pub fn set_status(&self, address: &ValidatorAddress, status: BondStatus) -> Result<(), KeeperError> {
        self.update(address, |v| v.status = status)
    }

    pub fn set_jailed(&self, address: &ValidatorAddress, jailed: bool) -> Result<(), KeeperError> {
        self.update(address, |v| v.jailed = jailed)
    }

    pub fn set_tokens(&self, address: &ValidatorAddress, tokens: u128) -> Result<(), KeeperError> {
        self.update(address, |v| v.tokens = tokens)
    }

    /// Mutations issued so far, oldest first.
    pub fn operations(&self) -> Vec<KeeperOperation> {
        self.operations.read().clone()
    }

    pub fn clear_operations(&self) {
        self.operations.write().clear();
    }

    fn update(
        &self,
        address: &ValidatorAddress,
        f: impl FnOnce(&mut ValidatorView),
    ) -> Result<(), KeeperError> {
        let mut validators = self.validators.write();
        let view = validators
            .get_mut(address)
            .ok_or(KeeperError::UnknownValidator(*address))?;
        f(view);
        Ok(())
    }
}

impl ValidatorSetKeeper for InMemoryStakingKeeper {
    fn lookup(&self, address: &ValidatorAddress) -> Result<Option<ValidatorView>, KeeperError> {
        Ok(self.get(address))
    }

    fn reduce_stake(&self, address: &ValidatorAddress, fraction: Dec) -> Result<u128, KeeperError> {
        if !fraction.le_one() {
            return Err(KeeperError::InvalidFraction(fraction));
        }
        let keep = Dec::one().checked_sub(fraction)?;

        let mut validators = self.validators.write();
        let view = validators
            .get_mut(address)
            .ok_or(KeeperError::UnknownValidator(*address))?;

        let tokens_before = view.tokens;
        let tokens_after = keep.mul_u128_truncate(tokens_before)?;
        view.tokens = tokens_after;

        debug!(
            "[qc-18] Stake reduced for {}: {} -> {}",
            address, tokens_before, tokens_after
        );

        self.operations.write().push(KeeperOperation::ReduceStake {
            address: *address,
            fraction,
            tokens_before,
            tokens_after,
        });
        Ok(tokens_after)
    }

    fn jail(&self, address: &ValidatorAddress) -> Result<(), KeeperError> {
        self.update(address, |v| v.jailed = true)?;
        self.operations
            .write()
            .push(KeeperOperation::Jail { address: *address });
        Ok(())
    }
}
