//! # Customer Routes
//!
//! Discount quotes, the three commit operations, and customer
//! registration/lookup.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /customer/check-discounts  { cart_value, customer_id }           │
//! │       │   ◄── [ Coupon Discount, ..., Summary ]                        │
//! │       ▼                                                                 │
//! │  client picks a coupon and cash vs points                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /customer/apply-discount   { cart_value, coupon_id,              │
//! │       │                            customer_id, option }               │
//! │       ▼                                                                 │
//! │  POST /customer/place-order      { customer_id, product_id,            │
//! │       │                            quantity, cart_value }              │
//! │       ▼                                                                 │
//! │  POST /customer/add-money-to-wallet { customer_id, amount, use_points }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use bazaar_core::validation::validate_birth_month;
use bazaar_core::{
    CoreError, Customer, DiscountApplication, DiscountLineItem, EntityId, Money, OrderReceipt,
    RewardOption, WalletUpdate,
};

use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customer/register", post(register))
        .route("/customer/{customer_id}", get(get_customer))
        .route("/customer/check-discounts", post(check_discounts))
        .route("/customer/apply-discount", post(apply_discount))
        .route("/customer/place-order", post(place_order))
        .route("/customer/add-money-to-wallet", post(add_money_to_wallet))
}

// =============================================================================
// Request / Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub birth_month: i64,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub customer_id: EntityId,
}

#[derive(Debug, Deserialize)]
pub struct CheckDiscountsRequest {
    pub cart_value: Money,
    pub customer_id: EntityId,
}

#[derive(Debug, Deserialize)]
pub struct ApplyDiscountRequest {
    pub cart_value: Money,
    pub coupon_id: EntityId,
    pub customer_id: EntityId,
    pub option: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub customer_id: EntityId,
    pub product_id: EntityId,
    pub quantity: i64,
    pub cart_value: Money,
}

#[derive(Debug, Deserialize)]
pub struct WalletRequest {
    pub customer_id: EntityId,
    #[serde(default)]
    pub amount: Money,
    #[serde(default)]
    pub use_points: bool,
}

/// A commit result with a human-readable `message` alongside its fields.
#[derive(Debug, Serialize)]
pub struct Confirmation<T> {
    pub message: &'static str,
    #[serde(flatten)]
    pub result: T,
}

impl<T> Confirmation<T> {
    fn new(message: &'static str, result: T) -> Json<Self> {
        Json(Confirmation { message, result })
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let birth_month = validate_birth_month(req.birth_month)?;
    let customer = state.store().customers().register(birth_month);

    Ok(Json(RegisterResponse {
        message: "Customer registered",
        customer_id: customer.id,
    }))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<EntityId>,
) -> ApiResult<Json<Customer>> {
    let customer = state
        .store()
        .customers()
        .get(customer_id)
        .ok_or_else(|| CoreError::not_found("Customer", customer_id))?;
    Ok(Json(customer))
}

/// Itemized quote; the last element is always the summary.
async fn check_discounts(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CheckDiscountsRequest>,
) -> ApiResult<Json<Vec<DiscountLineItem>>> {
    let items = state
        .engine
        .check_discounts(req.cart_value, req.customer_id)?;
    Ok(Json(items))
}

async fn apply_discount(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ApplyDiscountRequest>,
) -> ApiResult<Json<Confirmation<DiscountApplication>>> {
    let application = state.engine.apply_discount(
        req.cart_value,
        req.coupon_id,
        req.customer_id,
        &req.option,
    )?;

    let message = match application.option {
        RewardOption::Cash => "Cash discount applied successfully",
        RewardOption::Points => "Points credited successfully",
    };
    Ok(Confirmation::new(message, application))
}

async fn place_order(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<PlaceOrderRequest>,
) -> ApiResult<Json<Confirmation<OrderReceipt>>> {
    let receipt = state.engine.place_order(
        req.customer_id,
        req.product_id,
        req.quantity,
        req.cart_value,
    )?;
    Ok(Confirmation::new("Order placed successfully", receipt))
}

async fn add_money_to_wallet(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<WalletRequest>,
) -> ApiResult<Json<Confirmation<WalletUpdate>>> {
    let update = state
        .engine
        .add_money_to_wallet(req.customer_id, req.amount, req.use_points)?;
    Ok(Confirmation::new("Wallet updated successfully", update))
}
