//! Shared types for the TecHub storefront core
//!
//! Domain models used across crates: cart line items, orders and their
//! status lifecycle, favorites, addresses, product references, and the
//! current-user profile.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
