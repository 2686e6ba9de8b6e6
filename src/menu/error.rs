//! Error types for menu editing.

use thiserror::Error;

/// Errors that can occur while editing a [`Menu`](super::Menu).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// Nothing was ever added under this category.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The category exists but holds no item with this name.
    #[error("Item not found: {name} in category {category}")]
    ItemNotFound { category: String, name: String },

    /// No item with this name in any category.
    #[error("Not on the menu: {0}")]
    NotOnMenu(String),
}
