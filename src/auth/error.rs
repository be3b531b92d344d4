use thiserror::Error;

/// Errors raised while building the holder or its configuration.
///
/// Validation itself never fails: transport errors are absorbed into a
/// `false` result by [`TokenHolder::validate`](super::TokenHolder::validate).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}
