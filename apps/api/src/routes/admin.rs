//! # Admin Routes
//!
//! Admin activation and catalog maintenance.
//!
//! ```text
//! POST /admin/set-admin                     { secret }
//! POST /admin/add-or-remove/product         { secret, action, name, quantity, sale_price, product_id }
//! POST /admin/add-or-remove/coupon/category { action, name }
//! POST /admin/add-or-remove/coupon[/]       { secret, action, category, min_value, max_value,
//!                                             discount_percent, max_discount, coupon_id, description }
//! GET  /admin/coupon/categories
//! ```
//!
//! Product and coupon changes need an activated admin and the matching
//! secret. Category changes are open.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use bazaar_core::validation::validate_stock;
use bazaar_core::{CatalogAction, DiscountRate, EntityId, Money, NewCoupon, NewProduct};

use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/set-admin", post(set_admin))
        .route("/admin/add-or-remove/product", post(add_or_remove_product))
        .route(
            "/admin/add-or-remove/coupon/category",
            post(add_or_remove_category),
        )
        .route("/admin/add-or-remove/coupon", post(add_or_remove_coupon))
        .route("/admin/add-or-remove/coupon/", post(add_or_remove_coupon))
        .route("/admin/coupon/categories", get(list_categories))
}

// =============================================================================
// Request / Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SetAdminRequest {
    pub secret: String,
}

/// Fields not used by the chosen action may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub secret: String,
    pub action: String,
    pub name: String,
    pub quantity: i64,
    pub sale_price: Money,
    pub product_id: EntityId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryRequest {
    pub action: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CouponRequest {
    pub secret: String,
    pub action: String,
    pub category: String,
    pub min_value: Money,
    pub max_value: Money,
    pub discount_percent: DiscountRate,
    pub max_discount: Money,
    pub coupon_id: EntityId,
    pub description: String,
}

/// `{ "message": ... }` plus the new id after an add.
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<EntityId>,
}

impl AdminResponse {
    fn message(message: &'static str) -> Self {
        AdminResponse {
            message,
            product_id: None,
            coupon_id: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// One-time admin activation.
async fn set_admin(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SetAdminRequest>,
) -> ApiResult<Json<AdminResponse>> {
    state.admin.activate(&req.secret)?;
    Ok(Json(AdminResponse::message("Admin set successfully")))
}

async fn add_or_remove_product(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> ApiResult<Json<AdminResponse>> {
    state.admin.authorize(&req.secret)?;
    let action: CatalogAction = req.action.parse()?;
    let products = state.store().products();

    match action {
        CatalogAction::Add => {
            let product = products.insert(NewProduct {
                name: req.name,
                stock: validate_stock(req.quantity)?,
                sale_price: req.sale_price,
            })?;
            Ok(Json(AdminResponse {
                product_id: Some(product.id),
                ..AdminResponse::message("Product added")
            }))
        }
        CatalogAction::Remove => {
            products.remove(req.product_id)?;
            Ok(Json(AdminResponse::message("Product removed")))
        }
    }
}

async fn add_or_remove_category(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CategoryRequest>,
) -> ApiResult<Json<AdminResponse>> {
    let action: CatalogAction = req.action.parse()?;
    let categories = state.store().categories();

    match action {
        CatalogAction::Add => {
            categories.add(&req.name)?;
            Ok(Json(AdminResponse::message("Coupon category added")))
        }
        CatalogAction::Remove => {
            categories.remove(&req.name)?;
            Ok(Json(AdminResponse::message("Coupon category removed")))
        }
    }
}

async fn add_or_remove_coupon(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CouponRequest>,
) -> ApiResult<Json<AdminResponse>> {
    state.admin.authorize(&req.secret)?;
    let action: CatalogAction = req.action.parse()?;
    let coupons = state.store().coupons();

    match action {
        CatalogAction::Add => {
            let coupon = coupons.insert(NewCoupon {
                category: req.category,
                min_cart_value: req.min_value,
                max_cart_value: req.max_value,
                discount_percent: req.discount_percent,
                max_discount: req.max_discount,
                description: req.description,
            })?;
            Ok(Json(AdminResponse {
                coupon_id: Some(coupon.id),
                ..AdminResponse::message("Coupon added")
            }))
        }
        CatalogAction::Remove => {
            coupons.remove(req.coupon_id)?;
            Ok(Json(AdminResponse::message("Coupon removed")))
        }
    }
}

async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.store().categories().list(),
    })
}
