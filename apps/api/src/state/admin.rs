//! # Admin Gate
//!
//! One-time activation of the single admin, guarded by a shared secret.
//!
//! ```text
//!   ┌────────┐  set-admin(secret ok)   ┌────────┐
//!   │ Unset  │ ──────────────────────► │ Active │ ◄─┐ set-admin → AdminAlreadySet
//!   └────────┘                         └────────┘ ──┘
//!       │
//!       └── catalog change → AdminNotActivated
//! ```
//!
//! There is no way back from `Active`.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use bazaar_core::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminStatus {
    Unset,
    Active,
}

/// Admin activation state plus the configured secret.
#[derive(Debug)]
pub struct AdminGate {
    secret: String,
    status: Mutex<AdminStatus>,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        AdminGate {
            secret: secret.into(),
            status: Mutex::new(AdminStatus::Unset),
        }
    }

    /// Activates the admin. Succeeds once; later calls fail with
    /// `AdminAlreadySet` whatever secret they carry.
    pub fn activate(&self, secret: &str) -> CoreResult<()> {
        let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);

        if *status == AdminStatus::Active {
            return Err(CoreError::AdminAlreadySet);
        }
        if secret != self.secret {
            return Err(CoreError::InvalidSecret);
        }

        *status = AdminStatus::Active;
        info!("Admin activated");
        Ok(())
    }

    /// Checks that the admin is active and `secret` matches.
    pub fn authorize(&self, secret: &str) -> CoreResult<()> {
        if !self.is_active() {
            return Err(CoreError::AdminNotActivated);
        }
        if secret != self.secret {
            return Err(CoreError::InvalidSecret);
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) == AdminStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_once() {
        let gate = AdminGate::new("Admin123");
        assert!(!gate.is_active());

        assert!(matches!(gate.activate("wrong"), Err(CoreError::InvalidSecret)));
        assert!(!gate.is_active());

        gate.activate("Admin123").unwrap();
        assert!(gate.is_active());
        assert!(matches!(gate.activate("Admin123"), Err(CoreError::AdminAlreadySet)));
        assert!(matches!(gate.activate("wrong"), Err(CoreError::AdminAlreadySet)));
    }

    #[test]
    fn test_authorize_requires_activation_and_secret() {
        let gate = AdminGate::new("Admin123");
        assert!(matches!(gate.authorize("Admin123"), Err(CoreError::AdminNotActivated)));

        gate.activate("Admin123").unwrap();
        assert!(gate.authorize("Admin123").is_ok());
        assert!(matches!(gate.authorize("admin123"), Err(CoreError::InvalidSecret)));
    }
}
