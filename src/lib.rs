//! Admin token holder — client-side storage and validation of a single
//! admin API token.
//!
//! The crate keeps at most one token in memory for the lifetime of the
//! process and verifies it against the admin API's validation endpoint.
//! No persistence, no refresh, no retries.
//!
//! # Quick Start
//!
//! ```no_run
//! use admin_auth::TokenHolder;
//!
//! # async fn example() {
//! let holder = TokenHolder::new();
//! holder.set_token(Some("secret".to_string()));
//! if holder.validate().await {
//!     println!("token accepted");
//! }
//! # }
//! ```

pub mod auth;
pub mod config;

pub use auth::{AuthError, TokenHolder};
pub use config::AuthConfig;
