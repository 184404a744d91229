//! # HTTP Routes
//!
//! ## Route Organization
//! ```text
//! routes/
//! ├── mod.rs       ◄─── You are here (router assembly, /health)
//! ├── admin.rs     ◄─── Admin activation, products, coupons, categories
//! └── customer.rs  ◄─── Quotes, commits, registration
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TraceLayer (one span per request)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Router ── JsonBody<Request> ──► handler(State<AppState>)              │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                         Result<Json<Response>, ApiError>               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod customer;


use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(admin::routes())
        .merge(customer::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}
