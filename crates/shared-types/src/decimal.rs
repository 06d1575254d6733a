//! # Fixed-Point Decimal
//!
//! Non-negative decimal with 18 fractional digits, stored as a `u128` count
//! of 10^-18 units. Multiplication goes through a `U256` intermediate and
//! truncates toward zero, so every replica gets the same integer result.

use crate::errors::DecError;
use primitive_types::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional decimal digits.
pub const DEC_PRECISION: u32 = 18;

/// 10^DEC_PRECISION.
const DEC_ONE: u128 = 1_000_000_000_000_000_000;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(u128);

impl Dec {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn one() -> Self {
        Self(DEC_ONE)
    }

    /// Raw 10^-18 units.
    pub const fn from_raw(units: u128) -> Self {
        Self(units)
    }

    pub const fn raw(&self) -> u128 {
        self.0
    }

    pub fn from_int(value: u64) -> Self {
        // u64::MAX * 10^18 < u128::MAX
        Self(value as u128 * DEC_ONE)
    }

    /// `units * 10^-decimals`, e.g. `from_atomics(5, 2)` is `0.05`.
    pub fn from_atomics(units: u128, decimals: u32) -> Result<Self, DecError> {
        if decimals > DEC_PRECISION {
            return Err(DecError::TooManyFractionalDigits {
                digits: decimals as usize,
                max: DEC_PRECISION,
            });
        }
        let scale = 10u128.pow(DEC_PRECISION - decimals);
        units
            .checked_mul(scale)
            .map(Self)
            .ok_or(DecError::Overflow)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True for values in `[0, 1]`.
    pub fn le_one(&self) -> bool {
        self.0 <= DEC_ONE
    }

    pub fn checked_add(&self, other: Dec) -> Result<Dec, DecError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(DecError::Overflow)
    }

    pub fn checked_sub(&self, other: Dec) -> Result<Dec, DecError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(DecError::Underflow)
    }

    /// `floor(self * value)` for token amounts.
    pub fn mul_u128_truncate(&self, value: u128) -> Result<u128, DecError> {
        let product = U256::from(self.0) * U256::from(value) / U256::from(DEC_ONE);
        if product > U256::from(u128::MAX) {
            return Err(DecError::Overflow);
        }
        Ok(product.as_u128())
    }

    /// `floor(self * value)` for period counts.
    pub fn mul_u64_truncate(&self, value: u64) -> Result<u64, DecError> {
        let product = self.mul_u128_truncate(value as u128)?;
        u64::try_from(product).map_err(|_| DecError::Overflow)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / DEC_ONE,
            self.0 % DEC_ONE,
            width = DEC_PRECISION as usize
        )
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dec({})", self)
    }
}

impl FromStr for Dec {
    type Err = DecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecError::Empty);
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(DecError::Empty);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(DecError::InvalidCharacter(s.to_string()));
        }
        if frac_part.len() > DEC_PRECISION as usize {
            return Err(DecError::TooManyFractionalDigits {
                digits: frac_part.len(),
                max: DEC_PRECISION,
            });
        }

        let int_value: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| DecError::Overflow)?
        };
        let frac_value: u128 = if frac_part.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", frac_part, width = DEC_PRECISION as usize);
            padded.parse().map_err(|_| DecError::Overflow)?
        };

        int_value
            .checked_mul(DEC_ONE)
            .and_then(|v| v.checked_add(frac_value))
            .map(Self)
            .ok_or(DecError::Overflow)
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
