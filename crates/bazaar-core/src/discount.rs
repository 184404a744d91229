//! # Discount Rule Evaluators
//!
//! Each rule turns a cart value into an optional discount. `None` means the
//! rule does not apply; `Some(Money::zero())` means it applies but yields
//! nothing (a zero cart, a 0% coupon).
//!
//! ## Formula
//! ```text
//! discount = min(cart_value × percent / 100, cap)      cap: None = unbounded
//! ```
//!
//! Every rule is computed against the original cart value; combining rules is
//! plain summation, done by the caller.
//!
//! | Rule          | Applies when                      | Rate          | Cap       |
//! |---------------|-----------------------------------|---------------|-----------|
//! | Coupon        | min ≤ cart ≤ max (inclusive)      | coupon's own  | coupon's  |
//! | Special sale  | today is Dec 25 or Aug 15         | 5%            | none      |
//! | Birthday      | today's month = birth month       | 5%            | none      |
//! | Anniversary   | today is Dec 1                    | 5%            | none      |

use chrono::NaiveDate;

use crate::calendar::{is_anniversary, is_special_sale_day};
use crate::money::Money;
use crate::types::{BirthMonth, Coupon, DiscountRate};

/// Rate of the calendar and birthday bonuses (5%).
pub const EXTRA_DISCOUNT_RATE: DiscountRate = DiscountRate::from_bps(500);

/// Applies `rate` to `cart_value`, limited by `cap`.
///
/// ## Example
/// ```rust
/// use bazaar_core::discount::calculate_discount;
/// use bazaar_core::money::Money;
/// use bazaar_core::types::DiscountRate;
///
/// let cart = Money::from_units(5000);
/// let ten = DiscountRate::from_bps(1000);
/// assert_eq!(calculate_discount(cart, ten, Some(Money::from_units(300))), Money::from_units(300));
/// assert_eq!(calculate_discount(cart, ten, None), Money::from_units(500));
/// ```
pub fn calculate_discount(cart_value: Money, rate: DiscountRate, cap: Option<Money>) -> Money {
    let raw = cart_value.percentage(rate);
    match cap {
        Some(cap) => raw.min(cap),
        None => raw,
    }
}

/// Coupon rule. Applies only inside the coupon's cart-value window.
pub fn coupon_discount(coupon: &Coupon, cart_value: Money) -> Option<Money> {
    coupon.window_contains(cart_value).then(|| {
        calculate_discount(cart_value, coupon.discount_percent, Some(coupon.max_discount))
    })
}

pub fn special_sale_discount(cart_value: Money, today: NaiveDate) -> Option<Money> {
    is_special_sale_day(today).then(|| calculate_discount(cart_value, EXTRA_DISCOUNT_RATE, None))
}

pub fn birthday_discount(
    cart_value: Money,
    birth_month: BirthMonth,
    today: NaiveDate,
) -> Option<Money> {
    birth_month
        .contains(today)
        .then(|| calculate_discount(cart_value, EXTRA_DISCOUNT_RATE, None))
}

pub fn anniversary_discount(cart_value: Money, today: NaiveDate) -> Option<Money> {
    is_anniversary(today).then(|| calculate_discount(cart_value, EXTRA_DISCOUNT_RATE, None))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(min: i64, max: i64, pct_bps: u32, cap: i64) -> Coupon {
        Coupon {
            id: 1,
            category: "general".to_string(),
            min_cart_value: Money::from_units(min),
            max_cart_value: Money::from_units(max),
            discount_percent: DiscountRate::from_bps(pct_bps),
            max_discount: Money::from_units(cap),
            description: "test coupon".to_string(),
        }
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_calculate_discount_respects_cap() {
        let cart = Money::from_units(2000);
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(calculate_discount(cart, rate, Some(Money::from_units(300))), Money::from_units(200));
        assert_eq!(calculate_discount(cart, rate, Some(Money::from_units(150))), Money::from_units(150));
        assert_eq!(calculate_discount(Money::zero(), rate, None), Money::zero());
    }

    #[test]
    fn test_coupon_window_edges() {
        let c = coupon(100, 500, 1000, 1000);
        assert_eq!(coupon_discount(&c, Money::from_units(100)), Some(Money::from_units(10)));
        assert_eq!(coupon_discount(&c, Money::from_units(500)), Some(Money::from_units(50)));
        assert_eq!(coupon_discount(&c, Money::from_cents(9_999)), None);
        assert_eq!(coupon_discount(&c, Money::from_cents(50_001)), None);
    }

    #[test]
    fn test_zero_percent_coupon_applies_with_zero_value() {
        let c = coupon(0, 5000, 0, 300);
        assert_eq!(coupon_discount(&c, Money::from_units(2000)), Some(Money::zero()));
    }

    #[test]
    fn test_calendar_rules() {
        let cart = Money::from_units(1000);
        assert_eq!(special_sale_discount(cart, date(12, 25)), Some(Money::from_units(50)));
        assert_eq!(special_sale_discount(cart, date(12, 24)), None);
        assert_eq!(anniversary_discount(cart, date(12, 1)), Some(Money::from_units(50)));
        assert_eq!(anniversary_discount(cart, date(1, 12)), None);
    }

    #[test]
    fn test_birthday_rule() {
        let june = BirthMonth::new(6).unwrap();
        let cart = Money::from_units(2000);
        assert_eq!(birthday_discount(cart, june, date(6, 30)), Some(Money::from_units(100)));
        assert_eq!(birthday_discount(cart, june, date(7, 1)), None);
    }
}
