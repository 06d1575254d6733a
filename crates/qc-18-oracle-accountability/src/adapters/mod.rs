//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, used by tests and local
//! simulation.

mod governed_params;
mod memory_store;
mod staking_keeper;

pub use governed_params::GovernedParams;
pub use memory_store::InMemoryStateStore;
pub use staking_keeper::{InMemoryStakingKeeper, KeeperOperation};
