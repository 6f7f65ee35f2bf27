//! Current-user profile
//!
//! The value stored under the current-session key. Favorites and orders
//! scope their persisted collections by `id`.

use crate::models::address::Address;
use serde::{Deserialize, Serialize};

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl UserProfile {
    /// The address flagged default, else the first saved one.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }

    /// Append an address; a new default clears the previous default flag.
    pub fn add_address(&mut self, address: Address) {
        if address.is_default {
            for existing in &mut self.addresses {
                existing.is_default = false;
            }
        }
        self.addresses.push(address);
    }
}
