//! # Customer Repository
//!
//! Registration and lookup. Balances change only through the
//! [`RewardsEngine`](crate::engine::RewardsEngine); customers are never
//! deleted.

use tracing::{debug, info};

use bazaar_core::{BirthMonth, Customer, EntityId, Money};

use crate::store::EntityStore;

/// Repository for customer records.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    store: EntityStore,
}

impl CustomerRepository {
    pub fn new(store: EntityStore) -> Self {
        CustomerRepository { store }
    }

    /// Creates a customer with an empty wallet, no points and no orders.
    pub fn register(&self, birth_month: BirthMonth) -> Customer {
        let customer = self.store.write(|entities| {
            let customer = Customer {
                id: entities.allocate_customer_id(),
                wallet: Money::zero(),
                points: 0,
                birth_month,
                order_count: 0,
            };
            entities.customers.insert(customer.id, customer.clone());
            customer
        });

        info!(
            customer_id = customer.id,
            birth_month = birth_month.number(),
            "Customer registered"
        );
        customer
    }

    /// Gets a customer by id.
    pub fn get(&self, id: EntityId) -> Option<Customer> {
        debug!(customer_id = id, "Looking up customer");
        self.store.read(|entities| entities.customers.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_starts_with_zero_balances() {
        let repo = EntityStore::new().customers();
        let customer = repo.register(BirthMonth::new(7).unwrap());

        assert_eq!(customer.id, 1);
        assert!(customer.wallet.is_zero());
        assert_eq!(customer.points, 0);
        assert_eq!(customer.order_count, 0);
        assert_eq!(repo.get(1), Some(customer));
    }

    #[test]
    fn test_get_unknown_customer() {
        let repo = EntityStore::new().customers();
        assert!(repo.get(99).is_none());
    }
}
