//! Error types for building orders.

use thiserror::Error;

/// Errors that can occur while adding lines to an [`Order`](crate::model::Order).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
}
