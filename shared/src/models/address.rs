//! Shipping addresses

use serde::{Deserialize, Serialize};

/// Checkout form output.
///
/// Field validation is the UI layer's concern; the core stores whatever
/// the collaborator submits. The mobile number is normalized (separator
/// characters stripped) by checkout before it lands here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    pub name: String,
    pub mobile: String,
    pub street: String,
    pub barangay: String,
    pub province: String,
    pub municipality: String,
    pub postal_code: String,
    pub is_default: bool,
}
