//! Cart store
//!
//! The cart is one global ordered collection of line items, unique by
//! (id, color, size) identity. Adding a selection that matches an existing
//! line aggregates quantity instead of duplicating the line. Clearing
//! deletes the persisted key entirely, which the storage layer keeps
//! distinct from a persisted empty list; reads treat both as empty.

use crate::storage::{KvStore, StorageResult};
use shared::models::{CartCandidate, CartItem};

pub(crate) const CART_KEY: &str = "techub_cart";

#[derive(Clone)]
pub struct CartStore {
    kv: KvStore,
}

impl CartStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Current cart contents; empty when nothing is persisted or the
    /// persisted value does not parse.
    pub fn get(&self) -> Vec<CartItem> {
        self.kv.get_or_default(CART_KEY)
    }

    /// Add a resolved selection to the cart.
    ///
    /// A line with the same (id, color, size) identity aggregates by
    /// incrementing its quantity; the candidate's price/name/image are
    /// ignored on a merge. Returns the updated cart.
    pub fn add(&self, candidate: &CartCandidate) -> StorageResult<Vec<CartItem>> {
        let mut cart = self.get();

        match cart.iter_mut().find(|item| item.same_identity(candidate)) {
            Some(existing) => existing.quantity += 1,
            None => cart.push(CartItem::from_candidate(candidate)),
        }

        self.kv.put(CART_KEY, &cart)?;
        tracing::debug!(id = %candidate.id, lines = cart.len(), "Added to cart");
        Ok(cart)
    }

    /// Remove the line at `index`. Out-of-range indices leave the cart
    /// unchanged.
    pub fn remove(&self, index: usize) -> StorageResult<Vec<CartItem>> {
        let mut cart = self.get();

        if index < cart.len() {
            cart.remove(index);
            self.kv.put(CART_KEY, &cart)?;
        } else {
            tracing::warn!(index, len = cart.len(), "Cart remove out of range, unchanged");
        }

        Ok(cart)
    }

    /// Set the quantity of the line at `index`; zero removes the line.
    pub fn update_quantity(&self, index: usize, quantity: u32) -> StorageResult<Vec<CartItem>> {
        if quantity == 0 {
            return self.remove(index);
        }

        let mut cart = self.get();
        if let Some(item) = cart.get_mut(index) {
            item.quantity = quantity;
            self.kv.put(CART_KEY, &cart)?;
        } else {
            tracing::warn!(index, len = cart.len(), "Quantity update out of range, unchanged");
        }

        Ok(cart)
    }

    /// Delete the persisted cart entirely.
    pub fn clear(&self) -> StorageResult<()> {
        self.kv.remove(CART_KEY)
    }

    /// Cart total: sum of line subtotals.
    pub fn total(items: &[CartItem]) -> f64 {
        items.iter().map(CartItem::subtotal).sum()
    }
}
