//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. A catalog price such as `0.333` is kept as
//! written, line subtotals and the cart total are summed exactly, and
//! rounding to two places only happens when an amount is formatted.
//!
//! The store sells in a single currency, shown with the `zł` suffix.

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

pub use rust_decimal::Decimal;

/// Currency suffix used for every displayed amount.
pub const CURRENCY_SUFFIX: &str = "z\u{142}";

/// Decimal places shown for an amount.
const DISPLAY_SCALE: u32 = 2;

/// An exact, non-rounded monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Wrap an exact decimal amount.
    ///
    /// ```
    /// use ministore_commerce::money::{Decimal, Money};
    /// let price = Money::new(Decimal::new(1999, 2));
    /// assert_eq!(price.display(), "19.99 zł");
    /// ```
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Zero.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Build a catalog price from a JSON number.
    ///
    /// The number is taken at its shortest decimal spelling, so `19.99`
    /// becomes exactly `19.99`. Negative amounts, NaN, infinities and
    /// amounts too large for a [`Decimal`] are rejected.
    pub fn try_price(amount: f64) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        let spelled = amount.to_string();
        let exact = Decimal::from_str(&spelled)
            .map_err(|e| CommerceError::InvalidPrice(format!("{spelled}: {e}")))?;
        Ok(Self(exact.normalize()))
    }

    /// The exact amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Add, saturating at the bounds of [`Decimal`].
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, saturating at the bounds of [`Decimal`].
    pub fn saturating_mul(&self, quantity: i64) -> Money {
        Money(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Format with the currency suffix (e.g., "69.97 zł").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), CURRENCY_SUFFIX)
    }

    /// Round half away from zero to two places, no suffix (e.g., "69.97").
    pub fn display_amount(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        rounded.to_string()
    }
}

impl Sum for Money {
    /// Saturates instead of overflowing, like [`Money::saturating_add`].
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Carried as a plain JSON number (`"price": 19.99`), like the catalog.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => Err(serde::ser::Error::custom(format!("unrepresentable amount {}", self.0))),
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::try_price(amount).map_err(de::Error::custom)
    }
}
