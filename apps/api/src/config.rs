//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                    | Default    |
//! |-----------------------------|------------|
//! | `BAZAAR_HOST`               | `0.0.0.0`  |
//! | `BAZAAR_PORT`               | `8080`     |
//! | `BAZAAR_ADMIN_SECRET`       | `Admin123` |
//! | `BAZAAR_UTC_OFFSET_MINUTES` | `0`        |
//! | `BAZAAR_LOG_LEVEL`          | `info`     |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::FixedOffset;

/// Secret used to activate the admin when none is configured.
pub const DEFAULT_ADMIN_SECRET: &str = "Admin123";

/// Largest accepted |offset|, in minutes (just under a day).
const MAX_OFFSET_MINUTES: i32 = 1439;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address
    pub host: IpAddr,

    /// Listen port
    pub port: u16,

    /// Secret that activates the admin and authorizes catalog changes
    pub admin_secret: String,

    /// Offset applied to UTC when deciding today's date for calendar rules
    pub utc_offset: FixedOffset,

    /// Tracing filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("BAZAAR_HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BAZAAR_HOST".to_string()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = lookup("BAZAAR_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BAZAAR_PORT".to_string()))?;

        let admin_secret =
            lookup("BAZAAR_ADMIN_SECRET").unwrap_or_else(|| DEFAULT_ADMIN_SECRET.to_string());
        if admin_secret.is_empty() {
            return Err(ConfigError::MissingRequired("BAZAAR_ADMIN_SECRET".to_string()));
        }

        let offset_minutes: i32 = lookup("BAZAAR_UTC_OFFSET_MINUTES")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BAZAAR_UTC_OFFSET_MINUTES".to_string()))?;
        let utc_offset = (-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)
            .contains(&offset_minutes)
            .then(|| FixedOffset::east_opt(offset_minutes * 60))
            .flatten()
            .ok_or_else(|| ConfigError::InvalidValue("BAZAAR_UTC_OFFSET_MINUTES".to_string()))?;

        let log_level = lookup("BAZAAR_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(ApiConfig {
            host,
            port,
            admin_secret,
            utc_offset,
            log_level,
        })
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
