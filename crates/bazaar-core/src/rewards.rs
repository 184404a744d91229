//! # Reward Arithmetic
//!
//! Points and delivery rules. All conversions are exact integer math on
//! cents and truncate toward zero. Point results saturate at `u64::MAX`.
//!
//! | Conversion                  | Rule                               | In cents             |
//! |-----------------------------|------------------------------------|----------------------|
//! | cash discount → points      | floor(discount × 1.2)              | cents × 12 / 1000    |
//! | order → points              | floor(sale_price × quantity / 10)  | cents × qty / 1000   |
//! | points → wallet             | 1 point = 1 currency unit          | points × 100         |

use crate::money::{Money, CENTS_PER_UNIT};

/// Smallest cart value that ships free.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::from_units(1000);

/// Customers with this many prior orders or more pay for delivery.
pub const FREE_DELIVERY_MAX_PRIOR_ORDERS: u32 = 5;

/// Points a customer can take instead of `cash_discount`.
///
/// ## Example
/// ```rust
/// use bazaar_core::money::Money;
/// use bazaar_core::rewards::points_equivalent;
///
/// assert_eq!(points_equivalent(Money::from_units(300)), 360);
/// assert_eq!(points_equivalent(Money::from_cents(83)), 0);
/// ```
pub fn points_equivalent(cash_discount: Money) -> u64 {
    saturate_points(cash_discount.cents().max(0) as u128 * 12 / 1000)
}

/// Points earned by an order of `quantity` units at `sale_price`.
pub fn order_points(sale_price: Money, quantity: u64) -> u64 {
    saturate_points(sale_price.cents().max(0) as u128 * quantity as u128 / 1000)
}

fn saturate_points(points: u128) -> u64 {
    u64::try_from(points).unwrap_or(u64::MAX)
}

/// Free delivery needs fewer than five earlier orders and a cart of 1000+.
pub fn qualifies_for_free_delivery(prior_orders: u32, cart_value: Money) -> bool {
    prior_orders < FREE_DELIVERY_MAX_PRIOR_ORDERS && cart_value >= FREE_DELIVERY_THRESHOLD
}

/// Wallet credit for redeeming `points`, one currency unit each.
///
/// `None` when the credit does not fit in [`Money`].
pub fn points_to_wallet_credit(points: u64) -> Option<Money> {
    let cents = i64::try_from(points).ok()?.checked_mul(CENTS_PER_UNIT)?;
    Some(Money::from_cents(cents))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_equivalent_truncates() {
        assert_eq!(points_equivalent(Money::zero()), 0);
        assert_eq!(points_equivalent(Money::from_units(100)), 120);
        // 0.30 × 1.2 = 0.36
        assert_eq!(points_equivalent(Money::from_cents(30)), 0);
        // 12.50 × 1.2 = 15.0
        assert_eq!(points_equivalent(Money::from_cents(1250)), 15);
        // 12.49 × 1.2 = 14.988
        assert_eq!(points_equivalent(Money::from_cents(1249)), 14);
    }

    #[test]
    fn test_order_points() {
        // 40.00 × 3 / 10 = 12
        assert_eq!(order_points(Money::from_units(40), 3), 12);
        // 9.99 × 1 / 10 = 0.999
        assert_eq!(order_points(Money::from_cents(999), 1), 0);
        assert_eq!(order_points(Money::from_cents(999), 2), 1);
    }

    #[test]
    fn test_points_saturate_instead_of_wrapping() {
        // 9e16 units × 2^40 / 10 is far beyond u64
        let price = Money::from_units(90_000_000_000_000_000);
        assert_eq!(order_points(price, 1 << 40), u64::MAX);
        assert_eq!(order_points(price, u64::MAX), u64::MAX);

        let max = Money::from_cents(i64::MAX);
        assert_eq!(points_equivalent(max), (i64::MAX as u128 * 12 / 1000) as u64);
        assert_eq!(order_points(max, 1000), i64::MAX as u64);
    }

    #[test]
    fn test_free_delivery_boundaries() {
        assert!(qualifies_for_free_delivery(0, Money::from_units(1000)));
        assert!(!qualifies_for_free_delivery(0, Money::from_cents(99_999)));
        assert!(qualifies_for_free_delivery(4, Money::from_units(5000)));
        assert!(!qualifies_for_free_delivery(5, Money::from_units(5000)));
    }

    #[test]
    fn test_points_to_wallet_credit() {
        assert_eq!(points_to_wallet_credit(0), Some(Money::zero()));
        assert_eq!(points_to_wallet_credit(360), Some(Money::from_units(360)));
        assert_eq!(points_to_wallet_credit(u64::MAX), None);
        assert_eq!(points_to_wallet_credit(i64::MAX as u64 / 100 + 1), None);
    }
}
