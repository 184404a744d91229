//! # bazaar-store: Entity Store and Commit Engine for Bazaar
//!
//! This crate owns all mutable state: products, coupons, coupon categories
//! and customers. Nothing outside it mutates an entity directly.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Data Flow                                 │
//! │                                                                         │
//! │  HTTP handler (POST /customer/place-order)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bazaar-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  EntityStore  │    │  Repositories │    │ RewardsEngine│  │   │
//! │  │   │  (store.rs)   │◄───│ Product       │    │ (engine.rs)  │  │   │
//! │  │   │               │    │ Coupon        │    │ quote        │  │   │
//! │  │   │ Arc<RwLock<>> │◄───│ Category      │    │ apply        │  │   │
//! │  │   │               │    │ Customer      │    │ order/wallet │  │   │
//! │  │   └───────▲───────┘    └───────────────┘    └──────┬───────┘  │   │
//! │  │           └─────────────────────────────────────────┘          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bazaar-core (rules, evaluated on data read under the lock)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The locked entity maps and id counters
//! - [`repository`] - Catalog and customer repositories
//! - [`engine`] - Discount quotes and the atomic commit operations
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bazaar_core::{BirthMonth, Money, SystemClock};
//! use bazaar_store::{EntityStore, RewardsEngine};
//!
//! let store = EntityStore::new();
//! let customer = store.customers().register(BirthMonth::new(2).unwrap());
//!
//! let engine = RewardsEngine::new(store, Arc::new(SystemClock::utc()));
//! let update = engine
//!     .add_money_to_wallet(customer.id, Money::from_units(25), false)
//!     .unwrap();
//! assert_eq!(update.new_wallet, Money::from_units(25));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use engine::RewardsEngine;
pub use store::EntityStore;

pub use repository::{CategoryRepository, CouponRepository, CustomerRepository, ProductRepository};
