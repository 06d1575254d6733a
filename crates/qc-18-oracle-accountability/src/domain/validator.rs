//! Validator view
//!
//! Read-only snapshot of what the staking collaborator reports about one
//! validator. Never cached across calls.

use serde::{Deserialize, Serialize};
use shared_types::ValidatorAddress;

/// Bonding status as reported by the staking module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondStatus {
    Bonded,
    Unbonding,
    Unbonded,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorView {
    pub address: ValidatorAddress,
    /// Bonded token amount
    pub tokens: u128,
    pub status: BondStatus,
    pub jailed: bool,
}

impl ValidatorView {
    /// Bonded, unjailed validator.
    pub fn bonded(address: ValidatorAddress, tokens: u128) -> Self {
        Self {
            address,
            tokens,
            status: BondStatus::Bonded,
            jailed: false,
        }
    }

    pub fn is_bonded(&self) -> bool {
        self.status == BondStatus::Bonded
    }

    /// Only bonded, unjailed validators can be slashed by this subsystem.
    pub fn is_slashable(&self) -> bool {
        self.is_bonded() && !self.jailed
    }
}
