//! Persisted collection stores
//!
//! Each store is a thin read-modify-write layer over
//! [`KvStore`](crate::storage::KvStore): load the
//! whole collection, mutate in memory, persist the whole collection back.
//! Reads never fail — absent or corrupt values degrade to empty. Writes
//! return `StorageResult`.

pub mod cart;
pub mod favorites;
pub mod orders;

// Re-exports
pub use cart::CartStore;
pub use favorites::FavoritesStore;
pub use orders::OrderStore;
