//! # State Module
//!
//! Shared state handed to every handler through axum's `State` extractor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppState (Clone, cheap)                                               │
//! │  ├── engine: RewardsEngine                                             │
//! │  │     ├── EntityStore   Arc<RwLock<Entities>>                         │
//! │  │     └── Clock         Arc<dyn Clock>                                │
//! │  └── admin: Arc<AdminGate>                                             │
//! │        └── Mutex<Unset | Active>                                       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Entity maps: one RwLock, commits hold it for the whole operation    │
//! │  • Admin gate: own Mutex, never held while the store lock is taken     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;

use std::sync::Arc;

use bazaar_core::{Clock, SystemClock};
use bazaar_store::{EntityStore, RewardsEngine};

use crate::config::ApiConfig;

pub use admin::AdminGate;

/// State shared by all routes.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: RewardsEngine,
    pub admin: Arc<AdminGate>,
}

impl AppState {
    /// Builds an empty store reading dates from the wall clock at the
    /// configured offset.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            config.admin_secret.clone(),
            Arc::new(SystemClock::new(config.utc_offset)),
        )
    }

    pub fn new(admin_secret: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        AppState {
            engine: RewardsEngine::new(EntityStore::new(), clock),
            admin: Arc::new(AdminGate::new(admin_secret)),
        }
    }

    /// The entity store behind the engine.
    pub fn store(&self) -> &EntityStore {
        self.engine.store()
    }
}
