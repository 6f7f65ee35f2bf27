//! Domain models

pub mod address;
pub mod cart;
pub mod favorite;
pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use address::Address;
pub use cart::{CartCandidate, CartItem};
pub use favorite::FavoriteEntry;
pub use order::{Order, OrderStatus, StatusEntry};
pub use product::ProductRef;
pub use user::UserProfile;
