use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use thiserror::Error;

/// Errors raised when a price cannot be built from a dollar amount.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    /// Prices below zero are rejected.
    #[error("Price cannot be negative: {0}")]
    Negative(f64),

    /// NaN or infinite amounts.
    #[error("Price must be a finite number")]
    NotFinite,

    /// More cents than a `u64` can hold.
    #[error("Price too large: {0}")]
    TooLarge(f64),
}

/// A non-negative monetary amount, stored as whole cents.
///
/// Integer cents keep totals exact: `2 x $2.50 + $5.00 + $12.00` is always
/// `$22.00`, never `$21.999999`.
///
/// The `+`, `+=` and `*` operators saturate at [`Price::MAX`]. Use
/// [`checked_add`](Price::checked_add) and [`checked_mul`](Price::checked_mul)
/// where overflow has to be detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);
    pub const MAX: Price = Price(u64::MAX);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Builds a price from a dollar amount, rounded to the nearest cent.
    ///
    /// # Errors
    /// - [`PriceError::NotFinite`] for NaN or infinity
    /// - [`PriceError::Negative`] for amounts below zero
    /// - [`PriceError::TooLarge`] when the amount in cents does not fit a `u64`
    pub fn from_dollars(dollars: f64) -> Result<Self, PriceError> {
        if !dollars.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if dollars < 0.0 {
            return Err(PriceError::Negative(dollars));
        }
        let cents = (dollars * 100.0).round();
        // u64::MAX as f64 rounds up to 2^64, which is already out of range.
        if cents >= u64::MAX as f64 {
            return Err(PriceError::TooLarge(dollars));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.0.checked_add(rhs.0).map(Price)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(u64::from(quantity)).map(Price)
    }

    /// Lossy conversion for presentation only.
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}
