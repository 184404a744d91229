//! # Repository Module
//!
//! Catalog and customer access over the [`EntityStore`](crate::EntityStore).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.products().insert(new_product)                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert(&self, product)                                            │
//! │  ├── remove(&self, id)                                                 │
//! │  └── get(&self, id)                                                    │
//! │       │                                                                 │
//! │       │  one read() or write() critical section per call               │
//! │       ▼                                                                 │
//! │  Entities (BTreeMap per entity)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Multi-entity commits (orders, discounts, wallet) live in
//! [`engine`](crate::engine), not here.
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Product create/delete/lookup
//! - [`CouponRepository`] - Coupon create/delete
//! - [`CategoryRepository`] - Coupon category names
//! - [`CustomerRepository`] - Customer registration and lookup

pub mod category;
pub mod coupon;
pub mod customer;
pub mod product;

pub use category::CategoryRepository;
pub use coupon::CouponRepository;
pub use customer::CustomerRepository;
pub use product::ProductRepository;
