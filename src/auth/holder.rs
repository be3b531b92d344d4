use std::sync::Mutex;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::error::AuthError;
use crate::config::AuthConfig;

const VALIDATE_PATH: &str = "/api/admin/validate";

/// Single-slot holder for the admin API token.
///
/// Holds at most one token at a time. `set_token`/`clear_token` rewrite the
/// slot atomically; [`validate`](Self::validate) checks the current token
/// against the admin API's `GET /api/admin/validate` endpoint.
///
/// Construct one instance at startup and share it by reference.
///
/// # Example
/// ```no_run
/// use admin_auth::{AuthConfig, TokenHolder};
///
/// # async fn example() -> Result<(), admin_auth::AuthError> {
/// let holder = TokenHolder::with_config(AuthConfig::new("https://admin.example.com"))?;
/// holder.set_token(Some("secret".to_string()));
/// assert!(holder.validate().await);
/// # Ok(())
/// # }
/// ```
pub struct TokenHolder {
    client: reqwest::Client,
    validate_url: String,
    slot: Mutex<Option<String>>,
}

impl TokenHolder {
    /// Holder with default configuration.
    ///
    /// # Panics
    /// Panics if the default HTTP client cannot be built (TLS backend
    /// initialization), matching `reqwest::Client::new`.
    pub fn new() -> Self {
        Self::with_config(AuthConfig::default()).expect("default HTTP client")
    }

    pub fn with_config(config: AuthConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AuthError::Configuration(err.to_string()))?;
        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            validate_url: format!("{base}{VALIDATE_PATH}"),
            slot: Mutex::new(None),
        })
    }

    /// Override the full validation URL (mock servers in tests).
    pub fn with_validate_url(mut self, url: impl Into<String>) -> Self {
        self.validate_url = url.into();
        self
    }

    /// Replace the stored token. `None` empties the slot.
    pub fn set_token(&self, token: Option<String>) {
        match self.slot.lock() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }

    /// Empty the slot. A no-op when the slot is already empty.
    pub fn clear_token(&self) {
        self.set_token(None);
    }

    /// Check the stored token against the validation endpoint.
    ///
    /// Returns `false` without a network call when the slot is empty, the
    /// token is an empty string, or the token cannot be carried verbatim in
    /// an `Authorization` header. Otherwise sends exactly one GET and
    /// returns `true` iff the response status is 2xx; the body is ignored.
    ///
    /// Transport failures are absorbed into `false` — this method never
    /// errors. The token is read out of the slot before the request is
    /// sent, so a concurrent `set_token` only affects later calls.
    pub async fn validate(&self) -> bool {
        let token = match self.token() {
            Some(token) if !token.is_empty() => token,
            _ => return false,
        };
        let header = match HeaderValue::from_str(&token) {
            Ok(value) => value,
            Err(_) => {
                debug!("token is not a valid Authorization header value");
                return false;
            }
        };

        let response = self
            .client
            .get(&self.validate_url)
            .header(AUTHORIZATION, header)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await;

        match response {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "token validation request failed");
                false
            }
        }
    }
}

impl Default for TokenHolder {
    fn default() -> Self {
        Self::new()
    }
}
