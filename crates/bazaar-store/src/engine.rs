//! # Rewards Engine
//!
//! Quotes discounts and commits the customer-facing operations.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Customer Operations                              │
//! │                                                                         │
//! │  check_discounts ─► read lock ─► quote::check_discounts ─► line items  │
//! │                                                                         │
//! │  apply_discount ──┐                                                    │
//! │  place_order ─────┼─► write lock ─► look up + validate everything      │
//! │  add_money ───────┘                 │                                  │
//! │                                     ▼                                  │
//! │                              mutate, release, log                      │
//! │                                                                         │
//! │  A failed check returns before the first mutation, so a rejected       │
//! │  request leaves stock, points, wallet and order count untouched.       │
//! │  Sums that would overflow are failed checks too.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The clock is read once per call, before the lock is taken.

use std::sync::Arc;

use tracing::{debug, info};

use bazaar_core::error::{CoreError, CoreResult, ValidationError};
use bazaar_core::quote::{self, DiscountLineItem};
use bazaar_core::rewards::{
    order_points, points_equivalent, points_to_wallet_credit, qualifies_for_free_delivery,
};
use bazaar_core::validation::{validate_cart_value, validate_quantity, validate_wallet_amount};
use bazaar_core::{
    Clock, DiscountApplication, EntityId, Money, OrderReceipt, RewardOption, WalletUpdate,
};

use crate::store::EntityStore;

/// Customer-facing discount and order operations over an [`EntityStore`].
#[derive(Debug, Clone)]
pub struct RewardsEngine {
    store: EntityStore,
    clock: Arc<dyn Clock>,
}

impl RewardsEngine {
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        RewardsEngine { store, clock }
    }

    /// The store this engine commits against.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // =========================================================================
    // Quote
    // =========================================================================

    /// Itemizes every discount `customer_id` could get on `cart_value`.
    ///
    /// Read-only: repeated calls with no mutation in between return the same
    /// items.
    pub fn check_discounts(
        &self,
        cart_value: Money,
        customer_id: EntityId,
    ) -> CoreResult<Vec<DiscountLineItem>> {
        validate_cart_value(cart_value)?;
        let today = self.clock.today();

        let items = self.store.read(|entities| {
            let customer = entities
                .customers
                .get(&customer_id)
                .ok_or(CoreError::CustomerNotFound(customer_id))?;
            quote::check_discounts(cart_value, customer, entities.coupons.values(), today)
        })?;

        debug!(
            customer_id,
            %cart_value,
            line_items = items.len(),
            "Discounts quoted"
        );
        Ok(items)
    }

    // =========================================================================
    // Commits
    // =========================================================================

    /// Applies `coupon_id` (plus calendar and birthday rules) as cash or points.
    ///
    /// ## Arguments
    /// * `option` - `"cash"` or `"points"`; anything else fails before any lookup
    ///
    /// ## Behavior
    /// - `cash`: price drops by the discount (floored at zero), nothing stored
    /// - `points`: price unchanged, `floor(discount × 1.2)` points credited
    pub fn apply_discount(
        &self,
        cart_value: Money,
        coupon_id: EntityId,
        customer_id: EntityId,
        option: &str,
    ) -> CoreResult<DiscountApplication> {
        let option: RewardOption = option.parse()?;
        validate_cart_value(cart_value)?;
        let today = self.clock.today();

        let application = self.store.write(|entities| {
            let coupon = entities
                .coupons
                .get(&coupon_id)
                .ok_or(CoreError::CouponNotFound(coupon_id))?;
            let customer = entities
                .customers
                .get_mut(&customer_id)
                .ok_or(CoreError::CustomerNotFound(customer_id))?;

            let cash_discount = quote::apply_discount_total(cart_value, coupon, customer, today)?;

            let application = match option {
                RewardOption::Cash => DiscountApplication {
                    option,
                    original_cart_value: cart_value,
                    final_cart_value: cart_value.saturating_sub(cash_discount),
                    total_discount: cash_discount,
                    points_earned: 0,
                    new_total_points: None,
                },
                RewardOption::Points => {
                    let points_earned = points_equivalent(cash_discount);
                    customer.points = customer.points.saturating_add(points_earned);
                    DiscountApplication {
                        option,
                        original_cart_value: cart_value,
                        final_cart_value: cart_value,
                        total_discount: Money::zero(),
                        points_earned,
                        new_total_points: Some(customer.points),
                    }
                }
            };
            Ok::<_, CoreError>(application)
        })?;

        info!(
            customer_id,
            coupon_id,
            option = %option,
            total_discount = %application.total_discount,
            points_earned = application.points_earned,
            "Discount applied"
        );
        Ok(application)
    }

    /// Places an order for `quantity` units of `product_id`.
    ///
    /// ## Checks (all before any mutation)
    /// 1. quantity is positive
    /// 2. product exists and has at least `quantity` in stock
    /// 3. customer exists
    ///
    /// ## Effects
    /// Stock decremented, order count incremented, order points credited.
    /// Free delivery is judged on the order count *before* this order.
    pub fn place_order(
        &self,
        customer_id: EntityId,
        product_id: EntityId,
        quantity: i64,
        cart_value: Money,
    ) -> CoreResult<OrderReceipt> {
        let quantity = validate_quantity(quantity)?;

        let receipt = self.store.write(|entities| {
            let product = match entities.products.get_mut(&product_id) {
                Some(product) if product.can_sell(quantity) => product,
                other => {
                    return Err(CoreError::ProductUnavailable {
                        product_id,
                        available: other.map_or(0, |p| p.stock),
                        requested: quantity,
                    })
                }
            };
            let customer = entities
                .customers
                .get_mut(&customer_id)
                .ok_or(CoreError::CustomerNotFound(customer_id))?;

            let free_delivery = qualifies_for_free_delivery(customer.order_count, cart_value);
            let points_earned = order_points(product.sale_price, quantity);

            product.stock -= quantity;
            customer.order_count = customer.order_count.saturating_add(1);
            customer.points = customer.points.saturating_add(points_earned);

            Ok::<_, CoreError>(OrderReceipt {
                free_delivery,
                points_earned,
                remaining_stock: product.stock,
                updated_order_count: customer.order_count,
            })
        })?;

        info!(
            customer_id,
            product_id,
            quantity,
            free_delivery = receipt.free_delivery,
            points_earned = receipt.points_earned,
            remaining_stock = receipt.remaining_stock,
            "Order placed"
        );
        Ok(receipt)
    }

    /// Credits a customer's wallet.
    ///
    /// With `use_points`, the whole points balance converts 1:1 into wallet
    /// currency and `amount` is ignored. Otherwise `amount` (non-negative)
    /// is added.
    pub fn add_money_to_wallet(
        &self,
        customer_id: EntityId,
        amount: Money,
        use_points: bool,
    ) -> CoreResult<WalletUpdate> {
        if !use_points {
            validate_wallet_amount(amount)?;
        }

        let update = self.store.write(|entities| {
            let customer = entities
                .customers
                .get_mut(&customer_id)
                .ok_or(CoreError::CustomerNotFound(customer_id))?;

            let credit = if use_points {
                points_to_wallet_credit(customer.points)
                    .ok_or_else(|| ValidationError::overflow("points"))?
            } else {
                amount
            };
            let new_wallet = customer
                .wallet
                .checked_add(credit)
                .ok_or_else(|| ValidationError::overflow("wallet"))?;

            customer.wallet = new_wallet;
            if use_points {
                customer.points = 0;
            }

            Ok::<_, CoreError>(WalletUpdate {
                new_wallet: customer.wallet,
                remaining_points: customer.points,
            })
        })?;

        info!(
            customer_id,
            use_points,
            new_wallet = %update.new_wallet,
            "Wallet updated"
        );
        Ok(update)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
