//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │  Discounts are summed, then truncated into points (× 1.2, floor).      │
//! │  Truncation of an inexact sum can silently drop a point.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    All arithmetic happens on i64 cents, so sums and truncations are    │
//! │    exact. Floats only exist at the JSON boundary.                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Clients send and receive amounts as JSON numbers in major units
//! (`2000.0`, `999.99`). Deserialization rounds to the nearest cent;
//! serialization writes the cents back out as a major-unit number.
//!
//! ## Usage
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::types::DiscountRate;
//!
//! let cart = Money::from_cents(200_000); // 2000.00
//! let ten_percent = DiscountRate::from_bps(1000);
//! assert_eq!(cart.percentage(ten_percent).cents(), 20_000); // 200.00
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

use crate::types::DiscountRate;

/// Cents per major currency unit.
pub const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction results can be checked before clamping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: major-unit float on the wire, cents in memory
/// - **Checked sums**: `checked_add`/`checked_sum` return `None` on overflow
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  cart_value ──► rule evaluators ──► DiscountLineItem.discount_value    │
/// │                                            │                            │
/// │                                            ▼                            │
/// │                                  Summary.total_cash_discount           │
/// │                                                                         │
/// │  Product.sale_price ──► order points      Customer.wallet ◄── top-ups  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(1000).cents(), 100_000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Converts a major-unit amount received from a client into Money.
    ///
    /// Rounds to the nearest cent. Returns `None` for NaN, infinities and
    /// values outside the representable range.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(999.99).unwrap().cents(), 99_999);
    /// assert!(Money::from_amount(f64::NAN).is_none());
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        let cents = (amount * CENTS_PER_UNIT as f64).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value as a major-unit float (for the wire only).
    #[inline]
    pub fn amount(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage and returns the resulting amount.
    ///
    /// ## Implementation
    /// Integer math on basis points: `(cents * bps + 5000) / 10000`.
    /// The +5000 rounds half-up to the nearest cent. i128 prevents overflow.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    /// use bazaar_core::types::DiscountRate;
    ///
    /// let cart = Money::from_cents(1000); // 10.00
    /// let rate = DiscountRate::from_bps(825); // 8.25%
    /// // 10.00 × 8.25% = 0.825 → 0.83
    /// assert_eq!(cart.percentage(rate).cents(), 83);
    /// ```
    pub fn percentage(&self, rate: DiscountRate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Subtracts, clamping the result at zero.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let cart = Money::from_units(100);
    /// assert_eq!(cart.saturating_sub(Money::from_units(150)), Money::zero());
    /// ```
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Adds, returning `None` if the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let wallet = Money::from_units(10);
    /// assert_eq!(wallet.checked_add(Money::from_cents(50)), Some(Money::from_cents(1050)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    /// ```
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sums `amounts`, returning `None` on overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with two decimals. Debug/log output only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_amount(amount)
            .ok_or_else(|| serde::de::Error::custom("amount is not a finite currency value"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_amount_rounds_to_nearest_cent() {
        assert_eq!(Money::from_amount(999.99).unwrap().cents(), 99_999);
        assert_eq!(Money::from_amount(0.125).unwrap().cents(), 13);
        assert_eq!(Money::from_amount(2000.0).unwrap(), Money::from_units(2000));
        assert!(Money::from_amount(f64::INFINITY).is_none());
        assert!(Money::from_amount(f64::NAN).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(Money::checked_sum([a, b, b]), Some(Money::from_cents(2000)));
        assert_eq!(Money::checked_sum([]), Some(Money::zero()));
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let big = Money::from_cents(i64::MAX - 10);

        assert_eq!(big.checked_add(Money::from_cents(10)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(11)), None);
        assert_eq!(Money::checked_sum([big, big]), None);
    }

    #[test]
    fn test_percentage_of_largest_amount() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.percentage(DiscountRate::from_bps(10_000)), max);
    }

    #[test]
    fn test_percentage() {
        let cart = Money::from_units(2000);
        assert_eq!(cart.percentage(DiscountRate::from_bps(1000)), Money::from_units(200));
        assert_eq!(cart.percentage(DiscountRate::from_bps(500)), Money::from_units(100));
        assert_eq!(cart.percentage(DiscountRate::zero()), Money::zero());
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let cart = Money::from_units(100);
        assert_eq!(cart.saturating_sub(Money::from_units(40)), Money::from_units(60));
        assert_eq!(cart.saturating_sub(Money::from_units(400)), Money::zero());
        assert_eq!(Money::zero().saturating_sub(Money::from_cents(i64::MAX)), Money::zero());
    }

    #[test]
    fn test_serde_uses_major_units() {
        let json = serde_json::to_string(&Money::from_cents(99_999)).unwrap();
        assert_eq!(json, "999.99");

        let parsed: Money = serde_json::from_str("2000").unwrap();
        assert_eq!(parsed, Money::from_units(2000));

        let parsed: Money = serde_json::from_str("12.34").unwrap();
        assert_eq!(parsed.cents(), 1234);
    }
}
