//! Configuration for the admin API client (code > env > defaults).

use std::time::Duration;

use crate::auth::error::AuthError;

/// Origin of the admin API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client-level timeout applied to the validation request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for reaching the admin API.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Origin of the admin API (scheme + host + port). A trailing slash
    /// is tolerated.
    pub base_url: String,
    /// Timeout applied to the outbound validation request; bounds the
    /// worst-case latency of a validation call.
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuthConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load from environment variables (`ADMIN_API_BASE_URL`,
    /// `ADMIN_VALIDATE_TIMEOUT_SECS`), falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, AuthError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();

        if let Ok(url) = std::env::var("ADMIN_API_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(raw) = std::env::var("ADMIN_VALIDATE_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                AuthError::Configuration(format!(
                    "invalid ADMIN_VALIDATE_TIMEOUT_SECS: {raw}"
                ))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
