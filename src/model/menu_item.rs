use crate::model::Price;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named, priced catalog entry.
///
/// Menu items are immutable once created. To change an entry on a
/// [`Menu`](crate::menu::Menu), use [`Menu::update_item`](crate::menu::Menu::update_item),
/// which replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    /// Size or portion, e.g. "Large" or "6 pieces".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl MenuItem {
    /// Creates a new MenuItem with no category.
    ///
    /// # Arguments
    /// * `name` - Display name, e.g. "Coke"
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            category: None,
            detail: None,
        }
    }

    /// Attaches descriptive category metadata (e.g. "Beverage").
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attaches a size or portion descriptor, shown after the price.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Price of `quantity` units of this item.
    pub fn total_price(&self, quantity: u32) -> Price {
        self.price * quantity
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.price)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}
