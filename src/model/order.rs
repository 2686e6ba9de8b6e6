use crate::model::{MenuItem, Price};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested item and how many of it.
///
/// The line keeps its own copy of the item, so editing the menu afterwards
/// does not reprice orders already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl OrderLine {
    pub fn subtotal(&self) -> Price {
        self.item.total_price(self.quantity)
    }
}

impl Display for OrderLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x {}", self.quantity, self.item)
    }
}

/// Represents a customer order.
///
/// An order starts empty, collects [`OrderLine`]s through
/// [`Order::add_menu_item`], and receives its [`OrderId`] when it is submitted to an
/// [`OrderManager`](crate::order_manager::OrderManager).
///
/// See the [`order`](crate::order) module for the behaviour (adding lines, totals).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub(crate) id: Option<OrderId>,
    pub(crate) lines: Vec<OrderLine>,
}
