//! # Domain Types
//!
//! Core domain types used throughout Bazaar.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Coupon      │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  category       │   │  wallet         │       │
//! │  │  stock          │   │  min..max cart  │   │  points         │       │
//! │  │  sale_price     │   │  percent, cap   │   │  birth_month    │       │
//! │  └─────────────────┘   └─────────────────┘   │  order_count    │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │   BirthMonth    │   │  RewardOption   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  1..=12         │   │  Cash           │       │
//! │  │  1000 = 10%     │   │                 │   │  Points         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity is keyed by a `u64` assigned sequentially by the store,
//! starting at 1. Identifiers are never reused after removal.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

/// Identifier type shared by products, coupons and customers.
pub type EntityId = u64;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 500 bps = the 5% calendar/birthday bonus.
///
/// On the wire the rate is a plain percentage number (`10.0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct DiscountRate(#[ts(type = "number")] u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage, rounded to the nearest bps.
    ///
    /// Returns `None` for negative, NaN or absurdly large percentages.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(12.5).unwrap().bps(), 1250);
    /// assert!(DiscountRate::from_percentage(-1.0).is_none());
    /// ```
    pub fn from_percentage(pct: f64) -> Option<Self> {
        let bps = (pct * 100.0).round();
        if !bps.is_finite() || bps < 0.0 || bps > u32::MAX as f64 {
            return None;
        }
        Some(DiscountRate(bps as u32))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display and the wire).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

impl Serialize for DiscountRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.percentage())
    }
}

impl<'de> Deserialize<'de> for DiscountRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pct = f64::deserialize(deserializer)?;
        DiscountRate::from_percentage(pct)
            .ok_or_else(|| serde::de::Error::custom("discount percent must be a non-negative number"))
    }
}

// =============================================================================
// Birth Month
// =============================================================================

/// Calendar month (1 = January .. 12 = December) a customer was born in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export)]
pub struct BirthMonth(#[ts(type = "number")] u32);

impl BirthMonth {
    /// Creates a birth month, rejecting anything outside 1..=12.
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(BirthMonth(month))
    }

    /// Returns the month number (1-12).
    #[inline]
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// Checks whether `date` falls in this month (any year).
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.0
    }
}

impl Serialize for BirthMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for BirthMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let month = u32::deserialize(deserializer)?;
        BirthMonth::new(month)
            .ok_or_else(|| serde::de::Error::custom("birth month must be between 1 and 12"))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    #[ts(type = "number")]
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Units on hand. Never negative.
    #[ts(type = "number")]
    pub stock: u64,

    /// Unit sale price.
    pub sale_price: Money,
}

impl Product {
    /// Checks if `quantity` units can be taken from stock.
    #[inline]
    pub fn can_sell(&self, quantity: u64) -> bool {
        self.stock >= quantity
    }
}

/// Input for creating a product (identifier assigned by the store).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub stock: u64,
    pub sale_price: Money,
}

// =============================================================================
// Coupon
// =============================================================================

/// A percentage coupon applicable inside a cart-value window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    #[ts(type = "number")]
    pub id: EntityId,

    /// Category label (free text, not checked against the category list).
    pub category: String,

    /// Smallest cart value the coupon applies to (inclusive).
    pub min_cart_value: Money,

    /// Largest cart value the coupon applies to (inclusive).
    pub max_cart_value: Money,

    pub discount_percent: DiscountRate,

    /// Maximum amount this coupon can take off.
    pub max_discount: Money,

    pub description: String,
}

impl Coupon {
    /// Checks whether `cart_value` falls inside `[min, max]`, both inclusive.
    #[inline]
    pub fn window_contains(&self, cart_value: Money) -> bool {
        cart_value >= self.min_cart_value && cart_value <= self.max_cart_value
    }
}

/// Input for creating a coupon (identifier assigned by the store).
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    pub category: String,
    pub min_cart_value: Money,
    pub max_cart_value: Money,
    pub discount_percent: DiscountRate,
    pub max_discount: Money,
    pub description: String,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer and their reward balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    #[ts(type = "number")]
    pub id: EntityId,

    /// Wallet balance. Only ever credited.
    pub wallet: Money,

    /// Reward points balance.
    #[ts(type = "number")]
    pub points: u64,

    pub birth_month: BirthMonth,

    /// Lifetime number of orders placed. Never decreases.
    pub order_count: u32,
}

// =============================================================================
// Reward Option
// =============================================================================

/// How a customer takes a discount at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RewardOption {
    /// Reduce the cart price by the cash discount.
    Cash,
    /// Keep the price, credit 1.2 points per unit of cash discount.
    Points,
}

impl FromStr for RewardOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(RewardOption::Cash),
            "points" => Ok(RewardOption::Points),
            other => Err(CoreError::InvalidOption(other.to_string())),
        }
    }
}

impl fmt::Display for RewardOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardOption::Cash => f.write_str("cash"),
            RewardOption::Points => f.write_str("points"),
        }
    }
}

// =============================================================================
// Catalog Action
// =============================================================================

/// The `action` field of the admin add-or-remove endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    Add,
    Remove,
}

impl FromStr for CatalogAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(CatalogAction::Add),
            "remove" => Ok(CatalogAction::Remove),
            other => Err(CoreError::InvalidAction(other.to_string())),
        }
    }
}

// =============================================================================
// Commit Outcomes
// =============================================================================

/// Result of applying a discount to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountApplication {
    pub option: RewardOption,
    pub original_cart_value: Money,
    pub final_cart_value: Money,
    /// Cash taken off the cart. Zero when points were chosen.
    pub total_discount: Money,
    #[ts(type = "number")]
    pub points_earned: u64,
    /// Customer's points balance after the credit. Only set for `Points`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(type = "number | null")]
    pub new_total_points: Option<u64>,
}

/// Result of placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderReceipt {
    pub free_delivery: bool,
    #[ts(type = "number")]
    pub points_earned: u64,
    #[ts(type = "number")]
    pub remaining_stock: u64,
    pub updated_order_count: u32,
}

/// Result of a wallet top-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WalletUpdate {
    pub new_wallet: Money,
    #[ts(type = "number")]
    pub remaining_points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
