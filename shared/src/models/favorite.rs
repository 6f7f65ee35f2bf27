//! Favorite entries

use crate::models::product::ProductRef;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// Per-user favorite, unique by product id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    /// Product id
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    /// Creation timestamp (UTC millis)
    pub added_at: i64,
}

impl FavoriteEntry {
    pub fn from_product(product: &ProductRef) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            added_at: now_millis(),
        }
    }
}
