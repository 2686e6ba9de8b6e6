//! Order behaviour: collecting lines and computing the bill.
//!
//! The [`Order`] data type lives in [`crate::model`]; this module adds the
//! operations a customer performs on it before handing it to the
//! [`OrderManager`](crate::order_manager::OrderManager).

pub mod error;

pub use error::*;

use crate::model::{MenuItem, Order, OrderId, OrderLine, Price};
use std::fmt::Display;
use tracing::debug;

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `quantity` units of `item` as a new line.
    ///
    /// Repeated items are not merged; each call adds its own line.
    ///
    /// # Errors
    /// [`OrderError::InvalidQuantity`] when `quantity` is zero.
    pub fn add_menu_item(&mut self, item: MenuItem, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        debug!(item = item.name(), quantity, "Line added");
        self.lines.push(OrderLine { item, quantity });
        Ok(())
    }

    /// Sum of `price * quantity` over all lines. Zero for an empty order.
    pub fn calculate_total_price(&self) -> Price {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Set once the order has been submitted.
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: u64) -> MenuItem {
        MenuItem::new(name, Price::from_cents(cents))
    }

    #[test]
    fn test_total_price_sums_lines() {
        let mut order = Order::new();
        order.add_menu_item(item("Coke", 250), 2).unwrap();
        order.add_menu_item(item("Spring Rolls", 500), 1).unwrap();
        order.add_menu_item(item("Spaghetti", 1200), 1).unwrap();

        assert_eq!(order.len(), 3);
        assert_eq!(order.calculate_total_price(), Price::from_cents(2200));
        assert_eq!(order.calculate_total_price().to_string(), "$22.00");
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.calculate_total_price(), Price::ZERO);
        assert_eq!(order.id(), None);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut order = Order::new();
        let result = order.add_menu_item(item("Coke", 250), 0);

        assert_eq!(result, Err(OrderError::InvalidQuantity(0)));
        assert!(order.is_empty());
    }

    #[test]
    fn test_same_item_twice_adds_two_lines() {
        let mut order = Order::new();
        order.add_menu_item(item("Coke", 250), 1).unwrap();
        order.add_menu_item(item("Coke", 250), 3).unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.calculate_total_price(), Price::from_cents(1000));
    }

    #[test]
    fn test_display_lists_lines() {
        let mut order = Order::new();
        order.add_menu_item(item("Coke", 250), 1).unwrap();
        order.add_menu_item(item("Spring Rolls", 500), 2).unwrap();

        assert_eq!(order.to_string(), "1x Coke - $2.50\n2x Spring Rolls - $5.00");
    }
}
