//! # Product Repository
//!
//! Admin-side product operations. Stock decrements happen in
//! [`RewardsEngine::place_order`](crate::engine::RewardsEngine::place_order).

use tracing::{debug, info};

use bazaar_core::error::{CoreError, CoreResult};
use bazaar_core::validation::{validate_product_name, validate_sale_price};
use bazaar_core::{EntityId, NewProduct, Product};

use crate::store::EntityStore;

/// Repository for product operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: EntityStore,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(store: EntityStore) -> Self {
        ProductRepository { store }
    }

    /// Validates and stores a new product, assigning the next id.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::{Money, NewProduct};
    /// use bazaar_store::EntityStore;
    ///
    /// let store = EntityStore::new();
    /// let product = store.products().insert(NewProduct {
    ///     name: "Kettle".to_string(),
    ///     stock: 10,
    ///     sale_price: Money::from_units(40),
    /// }).unwrap();
    /// assert_eq!(product.id, 1);
    /// ```
    pub fn insert(&self, product: NewProduct) -> CoreResult<Product> {
        let name = validate_product_name(&product.name)?;
        validate_sale_price(product.sale_price)?;

        let product = self.store.write(|entities| {
            let product = Product {
                id: entities.allocate_product_id(),
                name,
                stock: product.stock,
                sale_price: product.sale_price,
            };
            entities.products.insert(product.id, product.clone());
            product
        });

        info!(product_id = product.id, name = %product.name, stock = product.stock, "Product added");
        Ok(product)
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The removed product
    /// * `Err(CoreError::NotFound)` - No product with that id
    pub fn remove(&self, id: EntityId) -> CoreResult<Product> {
        let product = self
            .store
            .write(|entities| entities.products.remove(&id))
            .ok_or_else(|| CoreError::not_found("Product", id))?;

        info!(product_id = id, "Product removed");
        Ok(product)
    }

    /// Gets a product by id.
    pub fn get(&self, id: EntityId) -> Option<Product> {
        debug!(product_id = id, "Looking up product");
        self.store.read(|entities| entities.products.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::Money;

    fn kettle() -> NewProduct {
        NewProduct {
            name: "Kettle".to_string(),
            stock: 5,
            sale_price: Money::from_units(40),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = EntityStore::new();
        let repo = store.products();
        assert_eq!(repo.insert(kettle()).unwrap().id, 1);
        assert_eq!(repo.insert(kettle()).unwrap().id, 2);
        assert_eq!(store.read(|entities| entities.products.len()), 2);
    }

    #[test]
    fn test_insert_trims_and_validates_name() {
        let store = EntityStore::new();
        let repo = store.products();
        let mut product = kettle();
        product.name = "  Toaster ".to_string();
        assert_eq!(repo.insert(product).unwrap().name, "Toaster");

        let mut blank = kettle();
        blank.name = " ".to_string();
        assert!(matches!(repo.insert(blank), Err(CoreError::Validation(_))));
        assert_eq!(store.read(|entities| entities.products.len()), 1);
    }

    #[test]
    fn test_remove() {
        let repo = EntityStore::new().products();
        let product = repo.insert(kettle()).unwrap();

        assert_eq!(repo.remove(product.id).unwrap(), product);
        assert!(repo.get(product.id).is_none());
        assert!(matches!(
            repo.remove(product.id),
            Err(CoreError::NotFound { entity: "Product", .. })
        ));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let repo = EntityStore::new().products();
        let first = repo.insert(kettle()).unwrap();
        repo.remove(first.id).unwrap();
        assert_eq!(repo.insert(kettle()).unwrap().id, 2);
    }
}
