//! Order store (per user)
//!
//! Orders are a most-recent-first sequence persisted under a per-user key.
//! Creation snapshots the cart into a new pending order and clears the
//! cart in the same write transaction, so an order is recorded if and only
//! if the cart is cleared. Status transitions are applied without
//! validation; cancellation is the one guarded edge of the lifecycle.

use crate::session::SessionStore;
use crate::storage::{KvStore, StorageResult};
use crate::stores::cart::CART_KEY;
use shared::models::{Address, CartItem, Order, OrderStatus};

fn orders_key(user_id: &str) -> String {
    format!("techub_orders_{user_id}")
}

#[derive(Clone)]
pub struct OrderStore {
    kv: KvStore,
    session: SessionStore,
}

impl OrderStore {
    pub fn new(kv: KvStore, session: SessionStore) -> Self {
        Self { kv, session }
    }

    /// Orders of the signed-in user, most recent first; empty without a
    /// session.
    pub fn get(&self) -> Vec<Order> {
        match self.session.current_user() {
            Some(user) => self.kv.get_or_default(&orders_key(&user.id)),
            None => Vec::new(),
        }
    }

    /// Create a pending order from a cart snapshot and clear the cart.
    ///
    /// The order-list write and the cart removal commit together; neither
    /// becomes visible without the other. Without a session nothing is
    /// written and `None` is returned.
    pub fn create(&self, items: Vec<CartItem>, total: f64) -> StorageResult<Option<Order>> {
        let Some(user) = self.session.current_user() else {
            tracing::debug!("create_order without a session, ignoring");
            return Ok(None);
        };

        let key = orders_key(&user.id);
        let mut orders: Vec<Order> = self.kv.get_or_default(&key);

        let order = Order::new(items, total);
        orders.insert(0, order.clone());

        let txn = self.kv.begin_write()?;
        self.kv.put_in(&txn, &key, &orders)?;
        self.kv.remove_in(&txn, CART_KEY)?;
        txn.commit()?;

        tracing::info!(order_id = %order.id, total, "Order created");
        Ok(Some(order))
    }

    /// Set an order's status and append exactly one history entry with its
    /// fixed message. An unknown id leaves the list unchanged. Transitions
    /// are not validated — the lifecycle is advisory except for
    /// [`cancel`](Self::cancel).
    pub fn update_status(&self, order_id: &str, status: OrderStatus) -> StorageResult<Vec<Order>> {
        let Some(user) = self.session.current_user() else {
            return Ok(Vec::new());
        };

        let key = orders_key(&user.id);
        let mut orders: Vec<Order> = self.kv.get_or_default(&key);

        match orders.iter_mut().find(|order| order.id == order_id) {
            Some(order) => {
                order.apply_status(status);
                self.kv.put(&key, &orders)?;
            }
            None => tracing::warn!(order_id = %order_id, "Status update for unknown order"),
        }

        Ok(orders)
    }

    /// Cancel an order. Permitted only while `pending` or `packed`; any
    /// other status returns `None` and changes nothing.
    pub fn cancel(&self, order_id: &str) -> StorageResult<Option<Order>> {
        let cancellable = self
            .get()
            .into_iter()
            .find(|order| order.id == order_id)
            .is_some_and(|order| order.status.is_cancellable());

        if !cancellable {
            tracing::debug!(order_id = %order_id, "Cancellation refused");
            return Ok(None);
        }

        let orders = self.update_status(order_id, OrderStatus::Cancelled)?;
        Ok(orders.into_iter().find(|order| order.id == order_id))
    }

    /// Attach the shipping address after creation. Returns the updated
    /// order, or `None` when the id is unknown.
    pub fn attach_shipping_address(
        &self,
        order_id: &str,
        address: Address,
    ) -> StorageResult<Option<Order>> {
        let Some(user) = self.session.current_user() else {
            return Ok(None);
        };

        let key = orders_key(&user.id);
        let mut orders: Vec<Order> = self.kv.get_or_default(&key);

        match orders.iter_mut().find(|order| order.id == order_id) {
            Some(order) => {
                order.shipping_address = Some(address);
                let updated = order.clone();
                self.kv.put(&key, &orders)?;
                Ok(Some(updated))
            }
            None => {
                tracing::warn!(order_id = %order_id, "Address attach for unknown order");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::cart::CartStore;
    use shared::models::{CartCandidate, UserProfile};

    struct Fixture {
        cart: CartStore,
        orders: OrderStore,
        session: SessionStore,
    }

    fn fixture() -> Fixture {
        let kv = KvStore::open_in_memory().unwrap();
        let session = SessionStore::new(kv.clone());
        Fixture {
            cart: CartStore::new(kv.clone()),
            orders: OrderStore::new(kv, session.clone()),
            session,
        }
    }

    fn user(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            addresses: Vec::new(),
        }
    }

    fn candidate(id: &str) -> CartCandidate {
        CartCandidate {
            id: id.to_string(),
            name: "Galaxy S25 Ultra".to_string(),
            price: 85000.0,
            image: "Products/s25.png".to_string(),
            color: "Titanium Gray".to_string(),
            size: Some("256GB".to_string()),
        }
    }

    #[test]
    fn test_create_prepends_and_clears_cart() {
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();

        let items = fx.cart.add(&candidate("a")).unwrap();
        let total = CartStore::total(&items);
        let first = fx.orders.create(items, total).unwrap().unwrap();
        assert!(fx.cart.get().is_empty());

        fx.cart.add(&candidate("b")).unwrap();
        let items = fx.cart.get();
        let second = fx.orders.create(items, 85000.0).unwrap().unwrap();

        let orders = fx.orders.get();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, second.id);
        assert_eq!(orders[1].id, first.id);
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_create_without_session_writes_nothing() {
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();
        fx.cart.add(&candidate("a")).unwrap();
        fx.session.sign_out().unwrap();

        let created = fx.orders.create(fx.cart.get(), 85000.0).unwrap();
        assert!(created.is_none());
        assert_eq!(fx.cart.get().len(), 1);
    }

    #[test]
    fn test_update_status_appends_one_history_entry() {
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();
        let order = fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();

        let orders = fx
            .orders
            .update_status(&order.id, OrderStatus::Shipped)
            .unwrap();
        assert_eq!(orders[0].status, OrderStatus::Shipped);
        assert_eq!(orders[0].status_history.len(), 2);
        assert_eq!(orders[0].status_history[1].message, "Order is on the way");
    }

    #[test]
    fn test_unguarded_transition_is_applied() {
        // The lifecycle is advisory: delivered → pending is not rejected.
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();
        let order = fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();

        fx.orders.update_status(&order.id, OrderStatus::Delivered).unwrap();
        let orders = fx
            .orders
            .update_status(&order.id, OrderStatus::Pending)
            .unwrap();
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].status_history.len(), 3);
    }

    #[test]
    fn test_cancel_pending_and_packed_only() {
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();

        let order = fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();
        let cancelled = fx.orders.cancel(&order.id).unwrap().unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);

        let order = fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();
        fx.orders.update_status(&order.id, OrderStatus::Packed).unwrap();
        assert!(fx.orders.cancel(&order.id).unwrap().is_some());

        let order = fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();
        fx.orders.update_status(&order.id, OrderStatus::Shipped).unwrap();
        assert!(fx.orders.cancel(&order.id).unwrap().is_none());

        let orders = fx.orders.get();
        let shipped = orders.iter().find(|o| o.id == order.id).unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_cancel_unknown_order() {
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();
        assert!(fx.orders.cancel("ORD-0").unwrap().is_none());
    }

    #[test]
    fn test_attach_shipping_address() {
        let fx = fixture();
        fx.session.sign_in(&user("u-1")).unwrap();
        let order = fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();

        let address = Address {
            name: "Test User".to_string(),
            province: "Cebu".to_string(),
            ..Address::default()
        };
        let updated = fx
            .orders
            .attach_shipping_address(&order.id, address)
            .unwrap()
            .unwrap();
        assert_eq!(updated.shipping_address.as_ref().unwrap().province, "Cebu");

        let persisted = fx.orders.get();
        assert!(persisted[0].shipping_address.is_some());
    }

    #[test]
    fn test_orders_are_scoped_per_user() {
        let fx = fixture();

        fx.session.sign_in(&user("u-1")).unwrap();
        fx.orders.create(Vec::new(), 0.0).unwrap().unwrap();

        fx.session.sign_in(&user("u-2")).unwrap();
        assert!(fx.orders.get().is_empty());
    }
}
