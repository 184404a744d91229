//! # Quote Aggregation
//!
//! Runs every discount rule over a cart and itemizes what applies.
//!
//! ## Quote Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ Coupon Discount        ]  one per coupon whose window fits the cart │
//! │  [ Coupon Discount        ]                                            │
//! │  [ Special Sale Discount  ]  0..1                                      │
//! │  [ Birthday Discount      ]  0..1                                      │
//! │  [ Anniversary Discount   ]  0..1                                      │
//! │  [ Summary                ]  exactly one, always last                  │
//! │      total_cash_discount = Σ discount_value above                      │
//! │      points_equivalent   = floor(total × 1.2)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A quote is informational. [`apply_discount_total`] is what the commit
//! path charges, and it deliberately sees a narrower set of rules: one
//! coupon, special sale, birthday. Anniversary never reaches a commit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount::{anniversary_discount, birthday_discount, coupon_discount, special_sale_discount};
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::rewards::points_equivalent;
use crate::types::{Coupon, Customer, EntityId};

pub const SPECIAL_SALE_DESCRIPTION: &str = "Extra discount for special sale days";
pub const BIRTHDAY_DESCRIPTION: &str = "Extra discount for your birthday month";
pub const ANNIVERSARY_DESCRIPTION: &str = "Flat 5% discount on company anniversary";
pub const SUMMARY_DESCRIPTION: &str =
    "You can choose between total cash discount or points equivalent.";

// =============================================================================
// Line Items
// =============================================================================

/// One row of a discount quote, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type")]
pub enum DiscountLineItem {
    #[serde(rename = "Coupon Discount")]
    Coupon {
        #[ts(type = "number")]
        coupon_id: EntityId,
        description: String,
        discount_value: Money,
    },

    #[serde(rename = "Special Sale Discount")]
    SpecialSale {
        description: String,
        discount_value: Money,
    },

    #[serde(rename = "Birthday Discount")]
    Birthday {
        description: String,
        discount_value: Money,
    },

    #[serde(rename = "Anniversary Discount")]
    Anniversary {
        description: String,
        discount_value: Money,
    },

    #[serde(rename = "Summary")]
    Summary {
        total_cash_discount: Money,
        #[ts(type = "number")]
        points_equivalent: u64,
        description: String,
    },
}

impl DiscountLineItem {
    /// Cash value of a rule item; `None` for the summary.
    pub fn discount_value(&self) -> Option<Money> {
        match self {
            DiscountLineItem::Coupon { discount_value, .. }
            | DiscountLineItem::SpecialSale { discount_value, .. }
            | DiscountLineItem::Birthday { discount_value, .. }
            | DiscountLineItem::Anniversary { discount_value, .. } => Some(*discount_value),
            DiscountLineItem::Summary { .. } => None,
        }
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Builds the itemized quote for `customer` buying a cart of `cart_value`.
///
/// Coupons are emitted in the order given. Fails with
/// [`ValidationError::Overflow`] if the discounts sum past the range of
/// [`Money`].
///
/// ## Example
/// ```rust
/// use bazaar_core::money::Money;
/// use bazaar_core::quote::{check_discounts, DiscountLineItem};
/// use bazaar_core::types::{BirthMonth, Customer};
/// use chrono::NaiveDate;
///
/// let customer = Customer {
///     id: 1,
///     wallet: Money::zero(),
///     points: 0,
///     birth_month: BirthMonth::new(3).unwrap(),
///     order_count: 0,
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let items = check_discounts(Money::from_units(2000), &customer, [], today).unwrap();
///
/// assert_eq!(items.len(), 2); // birthday + summary
/// assert!(matches!(items.last(), Some(DiscountLineItem::Summary { points_equivalent: 120, .. })));
/// ```
pub fn check_discounts<'a>(
    cart_value: Money,
    customer: &Customer,
    coupons: impl IntoIterator<Item = &'a Coupon>,
    today: NaiveDate,
) -> CoreResult<Vec<DiscountLineItem>> {
    let mut items: Vec<DiscountLineItem> = coupons
        .into_iter()
        .filter_map(|coupon| {
            coupon_discount(coupon, cart_value).map(|discount_value| DiscountLineItem::Coupon {
                coupon_id: coupon.id,
                description: coupon.description.clone(),
                discount_value,
            })
        })
        .collect();

    if let Some(discount_value) = special_sale_discount(cart_value, today) {
        items.push(DiscountLineItem::SpecialSale {
            description: SPECIAL_SALE_DESCRIPTION.to_string(),
            discount_value,
        });
    }

    if let Some(discount_value) = birthday_discount(cart_value, customer.birth_month, today) {
        items.push(DiscountLineItem::Birthday {
            description: BIRTHDAY_DESCRIPTION.to_string(),
            discount_value,
        });
    }

    if let Some(discount_value) = anniversary_discount(cart_value, today) {
        items.push(DiscountLineItem::Anniversary {
            description: ANNIVERSARY_DESCRIPTION.to_string(),
            discount_value,
        });
    }

    let total_cash_discount =
        Money::checked_sum(items.iter().filter_map(DiscountLineItem::discount_value))
            .ok_or_else(|| ValidationError::overflow("total_cash_discount"))?;
    items.push(DiscountLineItem::Summary {
        total_cash_discount,
        points_equivalent: points_equivalent(total_cash_discount),
        description: SUMMARY_DESCRIPTION.to_string(),
    });

    Ok(items)
}

/// Cash discount charged when `customer` applies `coupon` to a cart.
///
/// Coupon value (zero outside its window) plus special sale plus birthday.
pub fn apply_discount_total(
    cart_value: Money,
    coupon: &Coupon,
    customer: &Customer,
    today: NaiveDate,
) -> CoreResult<Money> {
    let parts = [
        coupon_discount(coupon, cart_value),
        special_sale_discount(cart_value, today),
        birthday_discount(cart_value, customer.birth_month, today),
    ];
    let total = Money::checked_sum(parts.into_iter().flatten())
        .ok_or_else(|| ValidationError::overflow("total_discount"))?;
    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================
