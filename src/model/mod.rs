//! Pure data structures: prices, menu items and orders.

pub mod menu_item;
pub mod order;
pub mod price;

pub use menu_item::*;
pub use order::*;
pub use price::*;
