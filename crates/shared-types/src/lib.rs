//! # Shared Types Crate
//!
//! Primitives used across the oracle accountability subsystem.
//!
//! ## Design Principles
//!
//! - **Deterministic Arithmetic**: All fractions are `Dec` fixed-point values.
//!   Native floats never touch replicated state.
//! - **Stable Ordering**: `ValidatorAddress` orders lexicographically by its
//!   bytes, which is the order every replica walks validators in.

pub mod decimal;
pub mod entities;
pub mod errors;

pub use decimal::{Dec, DEC_PRECISION};
pub use entities::*;
pub use errors::*;
