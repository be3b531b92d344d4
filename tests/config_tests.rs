//! Tests for the environment-backed configuration loader.

use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Duration;

use admin_auth::{AuthConfig, AuthError};
use pretty_assertions::assert_eq;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 2] = ["ADMIN_API_BASE_URL", "ADMIN_VALIDATE_TIMEOUT_SECS"];

// Env vars are process-global, so these tests serialize on ENV_LOCK and
// restore whatever was set before them.
fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[test]
fn from_env_falls_back_to_defaults() {
    let _lock = env_lock();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let config = AuthConfig::from_env().expect("defaults");
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.request_timeout, Duration::from_secs(10));
}

#[test]
fn from_env_reads_base_url_and_timeout() {
    let _lock = env_lock();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    std::env::set_var("ADMIN_API_BASE_URL", "https://admin.example.com");
    std::env::set_var("ADMIN_VALIDATE_TIMEOUT_SECS", "3");

    let config = AuthConfig::from_env().expect("env config");
    assert_eq!(config.base_url, "https://admin.example.com");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
}

#[test]
fn from_env_rejects_non_numeric_timeout() {
    let _lock = env_lock();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    std::env::remove_var("ADMIN_API_BASE_URL");
    std::env::set_var("ADMIN_VALIDATE_TIMEOUT_SECS", "soon");

    let result = AuthConfig::from_env();
    match result {
        Err(AuthError::Configuration(msg)) => {
            assert!(msg.contains("ADMIN_VALIDATE_TIMEOUT_SECS"));
        }
        other => panic!("expected Configuration error, got {other:?}"),
    }
}
