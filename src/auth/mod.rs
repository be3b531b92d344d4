//! In-memory token slot and remote validation.

pub mod error;
pub mod holder;

pub use error::AuthError;
pub use holder::TokenHolder;
