//! # Bazaar API
//!
//! JSON-over-HTTP front end for the bazaar rewards engine.
//!
//! ## Module Organization
//! ```text
//! bazaar-api/
//! ├── config.rs   ◄─── Environment configuration
//! ├── error.rs    ◄─── ApiError, status mapping
//! ├── extract.rs  ◄─── JsonBody extractor
//! ├── state/      ◄─── AppState, AdminGate
//! └── routes/     ◄─── /admin/*, /customer/*, /health
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use routes::router;
pub use state::AppState;
