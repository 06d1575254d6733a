//! Domain layer for Oracle Accountability subsystem
//!
//! ## Modules
//! - counter: Per-validator valid/miss/abstain tallies
//! - params: Governance parameters and their validation
//! - window: Periods per window and the valid-vote threshold
//! - validator: Staking collaborator's view of a validator
//! - outcome: What a window pass decided

mod counter;
mod outcome;
mod params;
mod validator;
mod window;

pub use counter::*;
pub use outcome::*;
pub use params::*;
pub use validator::*;
pub use window::*;
