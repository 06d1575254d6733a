//! # Error Types
//!
//! Errors raised while building shared primitives from untrusted input.

use thiserror::Error;

/// Errors produced by `Dec` parsing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecError {
    /// Input string was empty.
    #[error("Empty decimal string")]
    Empty,

    /// Input contained something other than digits and a single '.'.
    #[error("Invalid character in decimal: {0:?}")]
    InvalidCharacter(String),

    /// More fractional digits than the fixed precision can hold.
    #[error("Too many fractional digits: {digits} > {max}")]
    TooManyFractionalDigits { digits: usize, max: u32 },

    /// Result does not fit the backing integer.
    #[error("Decimal overflow")]
    Overflow,

    /// Subtraction would go below zero.
    #[error("Decimal underflow")]
    Underflow,
}

/// Errors produced when parsing a validator address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Not valid hex.
    #[error("Invalid hex address: {0}")]
    InvalidHex(String),

    /// Decoded to the wrong number of bytes.
    #[error("Invalid address length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
