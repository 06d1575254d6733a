//! Driven ports (Outbound dependencies)
//!
//! All three are synchronous. The slash pass runs inside block finalization
//! and must not suspend.

use crate::domain::{OracleParams, ValidatorView};
use crate::error::{KeeperError, StoreError};
use shared_types::{Dec, ValidatorAddress};

/// Persistent key-value state committed with the block
pub trait StateStore: Send + Sync {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    fn set(&self, key: Vec<u8>, value: Vec<u8>) -> Result<(), StoreError>;

    fn delete(&self, key: &[u8]) -> Result<(), StoreError>;

    /// All entries whose key starts with `prefix`, in ascending key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;
}

/// Validator-set collaborator (staking module)
///
/// The accountability subsystem never touches validator records directly.
/// It reads through `lookup` and mutates only through `reduce_stake` and
/// `jail`.
pub trait ValidatorSetKeeper: Send + Sync {
    /// Current view of a validator, `None` if unknown.
    fn lookup(&self, address: &ValidatorAddress) -> Result<Option<ValidatorView>, KeeperError>;

    /// Remove `fraction` of the validator's bonded tokens.
    ///
    /// Returns the new token amount, `floor(tokens * (1 - fraction))`.
    fn reduce_stake(&self, address: &ValidatorAddress, fraction: Dec) -> Result<u128, KeeperError>;

    /// Remove the validator from the active set.
    fn jail(&self, address: &ValidatorAddress) -> Result<(), KeeperError>;
}

/// Source of the governance parameters currently in force
pub trait ParamsProvider: Send + Sync {
    fn params(&self) -> OracleParams;
}
