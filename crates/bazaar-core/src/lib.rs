//! # bazaar-core: Pure Business Logic for Bazaar
//!
//! This crate is the **heart** of Bazaar. It contains every discount and
//! reward rule as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    /admin/*  ──►  /customer/check-discounts  ──►  commits      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               bazaar-store (entities + commit engine)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ discount  │  │   quote   │  │  rewards  │  │   │
//! │  │   │   Money   │  │  4 rules  │  │ line items│  │  points   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ calendar  │  │ validation│  │   error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • TODAY IS A PARAMETER              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Coupon, Customer, DiscountRate, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`calendar`] - Clock abstraction and calendar rules
//! - [`discount`] - The four discount rule evaluators
//! - [`quote`] - Itemized quote aggregation
//! - [`rewards`] - Points and free-delivery arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::discount::calculate_discount;
//! use bazaar_core::rewards::points_equivalent;
//! use bazaar_core::{DiscountRate, Money};
//!
//! let cart = Money::from_units(2000);
//! let discount = calculate_discount(cart, DiscountRate::from_bps(1000), Some(Money::from_units(300)));
//!
//! assert_eq!(discount, Money::from_units(200));
//! assert_eq!(points_equivalent(discount), 240);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod discount;
pub mod error;
pub mod money;
pub mod quote;
pub mod rewards;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calendar::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use quote::DiscountLineItem;
pub use types::*;
