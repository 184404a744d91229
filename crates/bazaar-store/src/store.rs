//! # Entity Store
//!
//! The single owner of every product, coupon, category and customer.
//!
//! ## Locking Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    EntityStore (Arc<RwLock<Entities>>)                  │
//! │                                                                         │
//! │  check-discounts ──► read()  ─┐                                        │
//! │  GET customer    ──► read()  ─┼─► many readers, one consistent snapshot │
//! │                               │                                        │
//! │  apply-discount  ──► write() ─┐                                        │
//! │  place-order     ──► write() ─┼─► one writer; validate, then mutate,   │
//! │  wallet / admin  ──► write() ─┘   all inside a single critical section │
//! │                                                                         │
//! │  Critical sections are short and never span an `.await`.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A poisoned lock is recovered rather than propagated. Writers compute and
//! check every new value (including overflow) before the first assignment,
//! so a failed commit leaves nothing half-applied.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use bazaar_core::{Coupon, Customer, EntityId, Product};

use crate::repository::{
    CategoryRepository, CouponRepository, CustomerRepository, ProductRepository,
};

// =============================================================================
// Entities
// =============================================================================

/// Every entity map plus the id counters.
///
/// Maps are ordered by id, so listings and quotes come out in ascending id
/// order.
#[derive(Debug)]
pub(crate) struct Entities {
    pub(crate) products: BTreeMap<EntityId, Product>,
    pub(crate) coupons: BTreeMap<EntityId, Coupon>,
    pub(crate) customers: BTreeMap<EntityId, Customer>,
    pub(crate) categories: Vec<String>,
    next_product_id: EntityId,
    next_coupon_id: EntityId,
    next_customer_id: EntityId,
}

impl Entities {
    fn new() -> Self {
        Entities {
            products: BTreeMap::new(),
            coupons: BTreeMap::new(),
            customers: BTreeMap::new(),
            categories: Vec::new(),
            next_product_id: 1,
            next_coupon_id: 1,
            next_customer_id: 1,
        }
    }

    pub(crate) fn allocate_product_id(&mut self) -> EntityId {
        let id = self.next_product_id;
        self.next_product_id += 1;
        id
    }

    pub(crate) fn allocate_coupon_id(&mut self) -> EntityId {
        let id = self.next_coupon_id;
        self.next_coupon_id += 1;
        id
    }

    pub(crate) fn allocate_customer_id(&mut self) -> EntityId {
        let id = self.next_customer_id;
        self.next_customer_id += 1;
        id
    }
}

// =============================================================================
// Entity Store
// =============================================================================

/// Shared handle to the entity maps. Cloning is cheap (an `Arc` bump).
///
/// ## Usage
/// ```rust
/// use bazaar_core::BirthMonth;
/// use bazaar_store::EntityStore;
///
/// let store = EntityStore::new();
/// let customer = store.customers().register(BirthMonth::new(4).unwrap());
/// assert_eq!(customer.id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct EntityStore {
    inner: Arc<RwLock<Entities>>,
}

impl EntityStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        EntityStore {
            inner: Arc::new(RwLock::new(Entities::new())),
        }
    }

    /// Runs `f` against a read-only snapshot.
    pub(crate) fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Entities) -> R,
    {
        let entities = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&entities)
    }

    /// Runs `f` with exclusive access. The lock is held for all of `f`.
    pub(crate) fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Entities) -> R,
    {
        let mut entities = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut entities)
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Returns the coupon repository.
    pub fn coupons(&self) -> CouponRepository {
        CouponRepository::new(self.clone())
    }

    /// Returns the coupon category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.clone())
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.clone())
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_per_entity() {
        let store = EntityStore::new();
        let ids = store.write(|e| {
            [
                e.allocate_product_id(),
                e.allocate_product_id(),
                e.allocate_coupon_id(),
                e.allocate_customer_id(),
            ]
        });
        assert_eq!(ids, [1, 2, 1, 1]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = EntityStore::new();
        let other = store.clone();
        other.write(|e| e.categories.push("Festive".to_string()));
        assert_eq!(store.read(|e| e.categories.len()), 1);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let store = EntityStore::new();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _: () = poisoner.write(|_| panic!("writer died"));
        })
        .join();

        store.write(|e| e.categories.push("Seasonal".to_string()));
        assert_eq!(store.read(|e| e.categories.clone()), vec!["Seasonal"]);
    }
}
