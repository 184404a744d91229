//! # Category Repository
//!
//! Coupon category names. Names compare case-insensitively: adding "festive"
//! when "Festive" exists is a duplicate, and removing "FESTIVE" removes it.

use tracing::info;

use bazaar_core::error::{CoreError, CoreResult, ValidationError};
use bazaar_core::validation::validate_category_name;

use crate::store::EntityStore;

/// Repository for coupon category names.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: EntityStore,
}

impl CategoryRepository {
    pub fn new(store: EntityStore) -> Self {
        CategoryRepository { store }
    }

    /// Adds a category, returning the stored (trimmed) name.
    pub fn add(&self, name: &str) -> CoreResult<String> {
        let name = validate_category_name(name)?;

        self.store.write(|entities| {
            if let Some(existing) = entities
                .categories
                .iter()
                .find(|c| c.eq_ignore_ascii_case(&name))
            {
                return Err(ValidationError::Duplicate {
                    field: "category".to_string(),
                    value: existing.clone(),
                });
            }
            entities.categories.push(name.clone());
            Ok(())
        })?;

        info!(category = %name, "Coupon category added");
        Ok(name)
    }

    /// Removes the first category matching `name`, ignoring case.
    pub fn remove(&self, name: &str) -> CoreResult<String> {
        let wanted = name.trim();

        let removed = self
            .store
            .write(|entities| {
                let index = entities
                    .categories
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(wanted))?;
                Some(entities.categories.remove(index))
            })
            .ok_or_else(|| CoreError::not_found("Category", wanted))?;

        info!(category = %removed, "Coupon category removed");
        Ok(removed)
    }

    /// Current category names in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.store.read(|entities| entities.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list_preserves_order() {
        let repo = EntityStore::new().categories();
        repo.add("Festive").unwrap();
        repo.add(" Electronics ").unwrap();
        assert_eq!(repo.list(), vec!["Festive", "Electronics"]);
    }

    #[test]
    fn test_duplicate_is_case_insensitive() {
        let repo = EntityStore::new().categories();
        repo.add("Festive").unwrap();

        let err = repo.add("FESTIVE").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let repo = EntityStore::new().categories();
        repo.add("Festive").unwrap();

        assert_eq!(repo.remove("festive").unwrap(), "Festive");
        assert!(repo.list().is_empty());
        assert!(matches!(
            repo.remove("festive"),
            Err(CoreError::NotFound { entity: "Category", .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let repo = EntityStore::new().categories();
        assert!(matches!(repo.add("  "), Err(CoreError::Validation(_))));
    }
}
