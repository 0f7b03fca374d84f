//! Amount type for representing currency values
//!
//! Amounts are decimal values stored as `f64`. Comparisons that decide
//! validity (allocation sums against income) go through [`AMOUNT_EPSILON`]
//! so that `5.1 + 4.9 == 10.0` style boundaries are not rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::ValidationError;

/// Tolerance used when comparing amounts
pub const AMOUNT_EPSILON: f64 = 1e-9;

/// A monetary amount in currency units (e.g. `10.5` is ten and a half)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Allowance earned at `rate` per period over `periods` periods
    ///
    /// ```
    /// use allowance::models::Amount;
    /// let income = Amount::for_periods(Amount::new(5.0), 4);
    /// assert_eq!(income, Amount::new(20.0));
    /// ```
    pub fn for_periods(rate: Amount, periods: u32) -> Self {
        Self(rate.0 * f64::from(periods))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Check whether the amount is zero within tolerance
    pub fn is_zero(&self) -> bool {
        self.0.abs() <= AMOUNT_EPSILON
    }

    /// Equality within [`AMOUNT_EPSILON`]
    pub fn approx_eq(&self, other: Amount) -> bool {
        (self.0 - other.0).abs() <= AMOUNT_EPSILON
    }

    /// True if `self` is larger than `limit` by more than [`AMOUNT_EPSILON`]
    pub fn exceeds(&self, limit: Amount) -> bool {
        self.0 > limit.0 + AMOUNT_EPSILON
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "10", "10.5", "$10.50", "-3"
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // `f64::from_str` would also accept "inf" and "NaN"
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(ValidationError::InvalidAmount(s.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| ValidationError::InvalidAmount(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep width/alignment flags working for table output
        let text = format!("{:.2}", self.0);
        f.pad(&text)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
