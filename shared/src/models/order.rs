//! Orders and the status lifecycle
//!
//! An order is an immutable snapshot of the cart at creation time plus a
//! mutable tail: status, status history, and an optionally attached
//! shipping address. The lifecycle is advisory — only cancellation is
//! guarded; any other transition can be applied directly.

use crate::models::address::Address;
use crate::models::cart::CartItem;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Fixed human-readable message recorded in the status history
    pub fn message(&self) -> &'static str {
        match self {
            Self::Pending => "Order placed successfully",
            Self::Packed => "Order has been packed",
            Self::Shipped => "Order is on the way",
            Self::Delivered => "Order delivered successfully",
            Self::Cancelled => "Order has been cancelled",
        }
    }

    /// Whether an order in this status may still be cancelled — the one
    /// enforced transition guard in the lifecycle
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Packed)
    }
}

/// One entry of an order's status history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusEntry {
    pub status: OrderStatus,
    /// UTC millis
    pub date: i64,
    pub message: String,
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Time-based id: `"ORD-{epoch_millis}"`
    pub id: String,
    /// Cart snapshot at creation time
    pub items: Vec<CartItem>,
    pub total: f64,
    pub status: OrderStatus,
    /// Creation timestamp (UTC millis)
    pub order_date: i64,
    pub status_history: Vec<StatusEntry>,
    /// Attached after creation by checkout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

/// Monotonic millis for order ids: a second order within the same
/// millisecond still gets a distinct id.
fn next_order_tick() -> i64 {
    static LAST: AtomicI64 = AtomicI64::new(0);
    let now = now_millis();
    LAST.fetch_max(now, Ordering::Relaxed);
    LAST.fetch_add(1, Ordering::Relaxed).max(now)
}

impl Order {
    /// Create a pending order from a cart snapshot.
    pub fn new(items: Vec<CartItem>, total: f64) -> Self {
        let now = next_order_tick();
        Self {
            id: format!("ORD-{now}"),
            items,
            total,
            status: OrderStatus::Pending,
            order_date: now,
            status_history: vec![StatusEntry {
                status: OrderStatus::Pending,
                date: now,
                message: OrderStatus::Pending.message().to_string(),
            }],
            shipping_address: None,
        }
    }

    /// Apply a status change, appending exactly one history entry.
    ///
    /// Transitions are not validated here; cancellation rules live with
    /// the order store.
    pub fn apply_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.status_history.push(StatusEntry {
            status,
            date: now_millis(),
            message: status.message().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_pending_with_seeded_history() {
        let order = Order::new(Vec::new(), 0.0);
        assert!(order.id.starts_with("ORD-"));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.status_history.len(), 1);
        assert_eq!(order.status_history[0].message, "Order placed successfully");
    }

    #[test]
    fn test_ids_stay_distinct_within_a_millisecond() {
        let a = Order::new(Vec::new(), 0.0);
        let b = Order::new(Vec::new(), 0.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_status_appends_one_entry() {
        let mut order = Order::new(Vec::new(), 0.0);
        order.apply_status(OrderStatus::Shipped);
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.status_history.len(), 2);
        assert_eq!(order.status_history[1].message, "Order is on the way");
    }

    #[test]
    fn test_cancellable_statuses() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Packed.is_cancellable());
        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }
}
