//! Stake weight used as the sampling weight of a draw.
//!
//! Weights are arbitrary-precision non-negative integers. Stake totals on a
//! leaderboard routinely exceed `u128` once expressed in 18-decimal base units,
//! so every sum and comparison goes through [`BigUint`].

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::TypesError;

/// A non-negative stake weight in base units.
///
/// Serialized as a decimal string so that no JSON consumer truncates it to a
/// double.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(BigUint);

impl Weight {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn new(raw: BigUint) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &BigUint {
        &self.0
    }

    pub fn into_raw(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a points value that may carry a fractional part.
    ///
    /// Integer strings are taken as base units unchanged. A value with a
    /// decimal point is scaled by `10^decimals`; fractional digits beyond
    /// `decimals` are truncated. An empty string is zero.
    pub fn from_points(value: &str, decimals: u32) -> Result<Self, TypesError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Self::zero());
        }

        let Some((integer, fraction)) = value.split_once('.') else {
            return value.parse();
        };

        let mut digits = String::with_capacity(integer.len() + decimals as usize);
        digits.push_str(integer);
        digits.extend(
            fraction
                .chars()
                .chain(std::iter::repeat('0'))
                .take(decimals as usize),
        );

        if digits.is_empty() {
            return Ok(Self::zero());
        }
        digits.parse().map_err(|_| TypesError::InvalidWeight {
            value: value.to_string(),
            reason: "expected a non-negative decimal number".into(),
        })
    }
}

impl FromStr for Weight {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidWeight {
            value: s.to_string(),
            reason: "expected a non-negative decimal integer".into(),
        };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl From<u64> for Weight {
    fn from(raw: u64) -> Self {
        Self(BigUint::from(raw))
    }
}

impl From<BigUint> for Weight {
    fn from(raw: BigUint) -> Self {
        Self(raw)
    }
}

impl Add<&Weight> for Weight {
    type Output = Weight;
    fn add(self, rhs: &Weight) -> Weight {
        Weight(self.0 + &rhs.0)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Self {
        iter.fold(Weight::zero(), |acc, w| acc + w)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
