//! First-in-first-out queue of pending orders.
//!
//! Each [`Order`] goes through exactly two states:
//!
//! - **Pending**: submitted with [`OrderManager::add_order`], owned by the manager.
//! - **Processed**: returned by [`OrderManager::process_order`], owned by the caller.
//!
//! Orders leave the queue strictly in the order they arrived. There is no
//! priority and no cancellation.
//!
//! ```
//! use restaurant_orders::model::{MenuItem, Order, Price};
//! use restaurant_orders::order_manager::OrderManager;
//!
//! let mut manager = OrderManager::new();
//! let mut order = Order::new();
//! order.add_menu_item(MenuItem::new("Coke", Price::from_cents(250)), 2).unwrap();
//! manager.add_order(order);
//!
//! while let Some(order) = manager.process_order() {
//!     assert_eq!(order.calculate_total_price().to_string(), "$5.00");
//! }
//! assert!(manager.is_empty());
//! ```

use crate::model::{Order, OrderId};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

#[derive(Debug, Default)]
pub struct OrderManager {
    pending: VecDeque<Order>,
    next_id: u64,
    processed: u64,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the next [`OrderId`] on `order` and enqueues it at the tail.
    #[instrument(skip(self, order), fields(lines = order.len()))]
    pub fn add_order(&mut self, mut order: Order) -> OrderId {
        self.next_id += 1;
        let id = OrderId(self.next_id);
        order.id = Some(id);
        debug!(?order, "add_order called");

        self.pending.push_back(order);
        info!(order_id = %id, pending = self.pending.len(), "Order queued");
        id
    }

    /// Removes and returns the oldest pending order, or `None` when the queue is empty.
    #[instrument(skip(self))]
    pub fn process_order(&mut self) -> Option<Order> {
        let Some(order) = self.pending.pop_front() else {
            debug!("No pending orders");
            return None;
        };
        self.processed += 1;

        if let Some(id) = order.id() {
            info!(order_id = %id, pending = self.pending.len(), "Order processed");
        }
        Some(order)
    }

    /// The order [`process_order`](Self::process_order) would return next.
    pub fn peek(&self) -> Option<&Order> {
        self.pending.front()
    }

    /// Pending orders, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Order> {
        self.pending.iter()
    }

    /// Processes every pending order, oldest first.
    ///
    /// Orders not yet pulled from the iterator stay queued if it is dropped early.
    pub fn drain(&mut self) -> impl Iterator<Item = Order> + '_ {
        std::iter::from_fn(move || self.process_order())
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of orders dequeued so far.
    pub fn total_processed(&self) -> u64 {
        self.processed
    }
}
