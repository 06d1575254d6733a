//! # qc-18-oracle-accountability
//!
//! Vote accountability for the price-oracle module.
//!
//! ## Overview
//!
//! The oracle tally classifies each validator's participation in every vote
//! period as valid, miss or abstain. This subsystem:
//! - **Counts**: keeps per-validator tallies for the current slash window
//! - **Judges**: at each window boundary, compares valid votes against
//!   `floor(min_valid_per_window * periods_per_window)`
//! - **Punishes**: slashes `slash_fraction` of stake and jails every bonded,
//!   unjailed validator that fell short
//! - **Resets**: clears every counter, penalized or not
//!
//! ## Architecture
//!
//! ```text
//! Oracle Tally ──increment_valid/miss/abstain──→ Oracle Accountability (18)
//!                                                        │
//! Block Loop ──end_block(height)────────────────────────→│
//!                                                        ├── lookup ────────→ Staking
//!                                                        ├── reduce_stake ──→ Staking
//!                                                        └── jail ──────────→ Staking
//! ```
//!
//! ## Determinism
//!
//! - Fractions are `Dec` fixed-point values, never floats
//! - Validators are processed in ascending address order
//! - Single-threaded, synchronous, no I/O. A failed pass fails the block.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qc_18_oracle_accountability::{
//!     AccountabilityDependencies, OracleAccountabilityApi, OracleAccountabilityService,
//! };
//!
//! let service = OracleAccountabilityService::new(AccountabilityDependencies {
//!     store,
//!     keeper,
//!     params,
//!     config: AccountabilityConfig::default(),
//! });
//!
//! service.increment_miss(&validator)?;
//! if let Some(outcome) = service.end_block(height)? {
//!     // outcome.penalized lists every validator slashed this window
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod counters;
pub mod domain;
pub mod engine;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{GovernedParams, InMemoryStakingKeeper, InMemoryStateStore, KeeperOperation};
pub use config::AccountabilityConfig;
pub use counters::PenaltyCounterStore;
pub use domain::{
    BondStatus, OracleParams, PenaltyCounter, SkipReason, SkippedValidator, ValidatorPenalized,
    ValidatorView, VoteOutcome, WindowAccountant, WindowOutcome,
};
pub use engine::SlashAndResetEngine;
pub use error::{
    AccountabilityError, AccountabilityResult, KeeperError, ParamsError, StoreError,
};
pub use events::{OracleEvent, WindowClosedEvent};
pub use ports::{OracleAccountabilityApi, ParamsProvider, StateStore, ValidatorSetKeeper};
pub use service::{AccountabilityDependencies, OracleAccountabilityService};
