//! Cart line items

use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// A resolved variant selection, ready to enter the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartCandidate {
    /// Materialized variant identity: `"{product_id}-{color}-{size|default}"`
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub color: String,
    pub size: Option<String>,
}

/// One line of the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub color: String,
    pub size: Option<String>,
    pub quantity: u32,
    /// Creation timestamp (UTC millis)
    pub added_at: i64,
}

impl CartItem {
    /// Build a fresh line (quantity 1) from a resolved candidate.
    pub fn from_candidate(candidate: &CartCandidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            price: candidate.price,
            image: candidate.image.clone(),
            color: candidate.color.clone(),
            size: candidate.size.clone(),
            quantity: 1,
            added_at: now_millis(),
        }
    }

    /// Merge identity: two lines aggregate iff (id, color, size) match.
    pub fn same_identity(&self, candidate: &CartCandidate) -> bool {
        self.id == candidate.id && self.color == candidate.color && self.size == candidate.size
    }

    /// Line subtotal
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CartCandidate {
        CartCandidate {
            id: "ip14-Silver-256GB".to_string(),
            name: "iPhone 14 Pro Max".to_string(),
            price: 63000.0,
            image: "Products/ip14 silver.png".to_string(),
            color: "Silver".to_string(),
            size: Some("256GB".to_string()),
        }
    }

    #[test]
    fn test_from_candidate_starts_at_quantity_one() {
        let item = CartItem::from_candidate(&candidate());
        assert_eq!(item.quantity, 1);
        assert!(item.same_identity(&candidate()));
    }

    #[test]
    fn test_identity_distinguishes_size() {
        let item = CartItem::from_candidate(&candidate());
        let mut other = candidate();
        other.size = Some("512GB".to_string());
        assert!(!item.same_identity(&other));
    }

    #[test]
    fn test_subtotal() {
        let mut item = CartItem::from_candidate(&candidate());
        item.quantity = 3;
        assert_eq!(item.subtotal(), 189000.0);
    }
}
