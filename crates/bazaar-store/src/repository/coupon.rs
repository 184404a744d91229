//! # Coupon Repository
//!
//! Coupons are created and deleted by the admin only. The category label is
//! free text and is not checked against the category list.

use tracing::info;

use bazaar_core::error::{CoreError, CoreResult};
use bazaar_core::validation::validate_coupon;
use bazaar_core::{Coupon, EntityId, NewCoupon};

use crate::store::EntityStore;

/// Repository for coupon operations.
#[derive(Debug, Clone)]
pub struct CouponRepository {
    store: EntityStore,
}

impl CouponRepository {
    pub fn new(store: EntityStore) -> Self {
        CouponRepository { store }
    }

    /// Validates and stores a new coupon, assigning the next id.
    pub fn insert(&self, coupon: NewCoupon) -> CoreResult<Coupon> {
        validate_coupon(&coupon)?;

        let coupon = self.store.write(|entities| {
            let coupon = Coupon {
                id: entities.allocate_coupon_id(),
                category: coupon.category.trim().to_string(),
                min_cart_value: coupon.min_cart_value,
                max_cart_value: coupon.max_cart_value,
                discount_percent: coupon.discount_percent,
                max_discount: coupon.max_discount,
                description: coupon.description,
            };
            entities.coupons.insert(coupon.id, coupon.clone());
            coupon
        });

        info!(
            coupon_id = coupon.id,
            category = %coupon.category,
            percent = coupon.discount_percent.percentage(),
            "Coupon added"
        );
        Ok(coupon)
    }

    /// Deletes a coupon, failing with `NotFound` if absent.
    pub fn remove(&self, id: EntityId) -> CoreResult<Coupon> {
        let coupon = self
            .store
            .write(|entities| entities.coupons.remove(&id))
            .ok_or_else(|| CoreError::not_found("Coupon", id))?;

        info!(coupon_id = id, "Coupon removed");
        Ok(coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{DiscountRate, Money};

    fn new_coupon(min: i64, max: i64) -> NewCoupon {
        NewCoupon {
            category: "Festive".to_string(),
            min_cart_value: Money::from_units(min),
            max_cart_value: Money::from_units(max),
            discount_percent: DiscountRate::from_bps(1000),
            max_discount: Money::from_units(300),
            description: "10% off".to_string(),
        }
    }

    fn stored_ids(store: &EntityStore) -> Vec<EntityId> {
        store.read(|entities| entities.coupons.keys().copied().collect())
    }

    #[test]
    fn test_insert_stores_trimmed_coupon() {
        let store = EntityStore::new();
        let mut input = new_coupon(0, 5000);
        input.category = "  Festive ".to_string();
        let coupon = store.coupons().insert(input).unwrap();

        assert_eq!(coupon.id, 1);
        assert_eq!(coupon.category, "Festive");
        assert_eq!(store.read(|entities| entities.coupons.get(&1).cloned()), Some(coupon));
    }

    #[test]
    fn test_insert_rejects_inverted_window() {
        let store = EntityStore::new();
        assert!(matches!(
            store.coupons().insert(new_coupon(5000, 100)),
            Err(CoreError::Validation(_))
        ));
        assert!(stored_ids(&store).is_empty());
    }

    #[test]
    fn test_remove_unknown_coupon() {
        let repo = EntityStore::new().coupons();
        assert!(matches!(
            repo.remove(42),
            Err(CoreError::NotFound { entity: "Coupon", .. })
        ));
    }

    #[test]
    fn test_remaining_coupons_keep_id_order() {
        let store = EntityStore::new();
        let repo = store.coupons();
        for _ in 0..3 {
            repo.insert(new_coupon(0, 100)).unwrap();
        }
        repo.remove(2).unwrap();

        assert_eq!(stored_ids(&store), vec![1, 3]);
    }
}
