//! Checkout: address intake and order submission

pub mod locations;

pub use locations::{Barangay, LocationDirectory};

use crate::session::SessionStore;
use crate::storage::StorageError;
use crate::stores::{CartStore, OrderStore};
use shared::models::{Address, Order};
use shared::util::normalize_mobile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Authentication required")]
    NotAuthenticated,
    #[error("Your cart is empty")]
    EmptyCart,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Turns a shipping address plus the current cart into a placed order.
#[derive(Clone)]
pub struct CheckoutService {
    cart: CartStore,
    orders: OrderStore,
    session: SessionStore,
}

impl CheckoutService {
    pub fn new(cart: CartStore, orders: OrderStore, session: SessionStore) -> Self {
        Self {
            cart,
            orders,
            session,
        }
    }

    /// Submit checkout with a shipping address.
    ///
    /// Saves the address to the user's profile, snapshots the cart into a
    /// new order (clearing the cart), and attaches the address to the
    /// order. Requires a session and a non-empty cart; nothing is written
    /// when either gate fails.
    pub fn submit(&self, mut address: Address) -> Result<Order, CheckoutError> {
        if !self.session.is_authenticated() {
            return Err(CheckoutError::NotAuthenticated);
        }

        address.mobile = normalize_mobile(&address.mobile);
        self.session.add_address(address.clone())?;

        let items = self.cart.get();
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let total = CartStore::total(&items);

        let order = self
            .orders
            .create(items, total)?
            .ok_or(CheckoutError::NotAuthenticated)?;
        let order = self
            .orders
            .attach_shipping_address(&order.id, address)?
            .unwrap_or(order);

        tracing::info!(order_id = %order.id, total = order.total, "Checkout complete");
        Ok(order)
    }
}
