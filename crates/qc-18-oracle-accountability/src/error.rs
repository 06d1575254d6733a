//! Error types for Oracle Accountability subsystem
//!
//! Nothing here is user-facing. Missing data is absorbed by the caller as a
//! no-op; every error that does surface is fatal to block processing.

use shared_types::{Dec, DecError, ValidatorAddress};
use thiserror::Error;

/// Rejected governance parameter update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("Vote period must be positive")]
    ZeroVotePeriod,

    #[error("Slash window must be positive")]
    ZeroSlashWindow,

    #[error("Slash window {slash_window} shorter than vote period {vote_period}")]
    WindowShorterThanPeriod { slash_window: u64, vote_period: u64 },

    #[error("Min valid per window must be in [0, 1], got {0}")]
    MinValidOutOfRange(Dec),

    #[error("Slash fraction must be in [0, 1], got {0}")]
    SlashFractionOutOfRange(Dec),

    #[error("Parameter arithmetic failed: {0}")]
    Arithmetic(#[from] DecError),
}

/// Key-value state errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Corrupted entry at key {key}: {reason}")]
    Corrupted { key: String, reason: String },

    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Errors reported by the validator-set collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeeperError {
    #[error("Unknown validator: {0}")]
    UnknownValidator(ValidatorAddress),

    #[error("Invalid slash fraction: {0}")]
    InvalidFraction(Dec),

    #[error("Stake arithmetic failed: {0}")]
    Arithmetic(#[from] DecError),

    #[error("Staking state error: {0}")]
    StateError(String),
}

/// Top-level error for the accountability subsystem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountabilityError {
    #[error("Invalid oracle params: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Staking keeper error: {0}")]
    Keeper(#[from] KeeperError),

    #[error("Stake invariant violated for {address}: {before} -> {after}")]
    StakeInvariant {
        address: ValidatorAddress,
        before: u128,
        after: u128,
    },
}

/// Result type for accountability operations
pub type AccountabilityResult<T> = Result<T, AccountabilityError>;
