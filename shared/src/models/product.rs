//! Product reference

use serde::{Deserialize, Serialize};

/// Product as the catalog/UI hands it to the variant resolver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    pub id: String,
    pub name: String,
    /// Base price, used when no size-specific price applies
    pub price: f64,
    pub image: String,
}
