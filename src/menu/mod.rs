//! The restaurant menu: an insertion-ordered catalog of [`MenuItem`]s.
//!
//! Every item is filed under a descriptive category ("Beverage", "Appetizer", ...).
//! Categories carry no behaviour; they only scope [`Menu::update_item`] and
//! [`Menu::delete_item`] and group the listing in [`Menu::items_in`].
//! A category stays on the menu once added, even after its last item is deleted.
//! Duplicate names are allowed and produce separate entries.

pub mod error;

pub use error::*;

use crate::model::{MenuItem, Price};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Payload for replacing an existing menu entry.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
    /// Every category ever added to, first-seen order.
    categories: Vec<String>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item under `category` and returns it.
    pub fn add_item(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        price: Price,
    ) -> &MenuItem {
        self.add(category, MenuItem::new(name, price))
    }

    /// Appends a prebuilt item (e.g. one carrying a size via
    /// [`MenuItem::with_detail`]) under `category`.
    pub fn add(&mut self, category: impl Into<String>, item: MenuItem) -> &MenuItem {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category.clone());
        }

        let item = item.with_category(category);
        info!(name = item.name(), category = ?item.category(), price = %item.price(), "Menu item added");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// All items, in the order they were added.
    pub fn get_menu(&self) -> &[MenuItem] {
        &self.items
    }

    /// Categories in first-seen order, including ones whose items were all deleted.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    pub fn items_in(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category() == Some(category))
            .collect()
    }

    /// First item with this name, in any category.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Like [`find`](Self::find), for callers that treat a missing item as an error.
    ///
    /// # Errors
    /// [`MenuError::NotOnMenu`] if no item has this name.
    pub fn find_or_err(&self, name: &str) -> Result<&MenuItem, MenuError> {
        self.find(name)
            .ok_or_else(|| MenuError::NotOnMenu(name.to_string()))
    }

    /// Replaces the first item named `old_name` in `category`.
    ///
    /// # Errors
    /// - [`MenuError::CategoryNotFound`] if `category` was never added to
    /// - [`MenuError::ItemNotFound`] if the category has no item named `old_name`
    pub fn update_item(
        &mut self,
        category: &str,
        old_name: &str,
        update: MenuItemUpdate,
    ) -> Result<&MenuItem, MenuError> {
        debug!(category, old_name, ?update, "update_item called");
        self.ensure_category(category)?;

        let index = self
            .items
            .iter()
            .position(|item| item.category() == Some(category) && item.name() == old_name)
            .ok_or_else(|| MenuError::ItemNotFound {
                category: category.to_string(),
                name: old_name.to_string(),
            })?;

        let current = &self.items[index];
        let name = update.name.unwrap_or_else(|| current.name().to_string());
        let price = update.price.unwrap_or(current.price());
        let detail = update.detail.or_else(|| current.detail().map(str::to_string));

        let mut replacement = MenuItem::new(name, price).with_category(category);
        if let Some(detail) = detail {
            replacement = replacement.with_detail(detail);
        }
        self.items[index] = replacement;

        let updated = &self.items[index];
        info!(old_name, name = updated.name(), price = %updated.price(), "Menu item updated");
        Ok(updated)
    }

    /// Removes every item named `name` in `category` and returns how many were removed.
    ///
    /// # Errors
    /// [`MenuError::CategoryNotFound`] if `category` was never added to.
    pub fn delete_item(&mut self, category: &str, name: &str) -> Result<usize, MenuError> {
        self.ensure_category(category)?;

        let before = self.items.len();
        self.items
            .retain(|item| !(item.category() == Some(category) && item.name() == name));
        let removed = before - self.items.len();

        if removed == 0 {
            warn!(category, name, "Nothing to delete");
        } else {
            info!(category, name, removed, "Menu item deleted");
        }
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn ensure_category(&self, category: &str) -> Result<(), MenuError> {
        if self.categories.iter().any(|known| known == category) {
            Ok(())
        } else {
            Err(MenuError::CategoryNotFound(category.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add_item("Beverage", "Coke", Price::from_cents(250));
        menu.add_item("Appetizer", "Spring Rolls", Price::from_cents(500));
        menu.add_item("Maincourse", "Spaghetti", Price::from_cents(1200));
        menu
    }

    #[test]
    fn test_get_menu_keeps_insertion_order() {
        let menu = sample_menu();
        let names: Vec<&str> = menu.get_menu().iter().map(MenuItem::name).collect();
        assert_eq!(names, ["Coke", "Spring Rolls", "Spaghetti"]);
        assert_eq!(menu.get_menu()[2].price(), Price::from_cents(1200));
        assert_eq!(menu.get_menu()[0].category(), Some("Beverage"));
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut menu = sample_menu();
        menu.add_item("Beverage", "Coke", Price::from_cents(300));

        assert_eq!(menu.len(), 4);
        assert_eq!(menu.items_in("Beverage").len(), 2);
        // Lookup returns the first one added.
        assert_eq!(menu.find("Coke").unwrap().price(), Price::from_cents(250));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut menu = sample_menu();
        menu.add_item("Beverage", "Lemonade", Price::from_cents(300));
        assert_eq!(menu.categories(), ["Beverage", "Appetizer", "Maincourse"]);
    }

    #[test]
    fn test_update_item_keeps_unset_fields() {
        let mut menu = sample_menu();
        let update = MenuItemUpdate {
            price: Some(Price::from_cents(275)),
            ..Default::default()
        };

        let updated = menu.update_item("Beverage", "Coke", update).unwrap();
        assert_eq!(updated.name(), "Coke");
        assert_eq!(updated.price(), Price::from_cents(275));
        assert_eq!(updated.category(), Some("Beverage"));
        // Position on the menu is unchanged.
        assert_eq!(menu.get_menu()[0].price(), Price::from_cents(275));
    }

    #[test]
    fn test_update_item_errors() {
        let mut menu = sample_menu();

        let result = menu.update_item("Dessert", "Cake", MenuItemUpdate::default());
        assert_eq!(result, Err(MenuError::CategoryNotFound("Dessert".to_string())));

        let result = menu.update_item("Beverage", "Pepsi", MenuItemUpdate::default());
        assert_eq!(
            result,
            Err(MenuError::ItemNotFound {
                category: "Beverage".to_string(),
                name: "Pepsi".to_string(),
            })
        );
    }

    #[test]
    fn test_delete_item() {
        let mut menu = sample_menu();
        menu.add_item("Beverage", "Coke", Price::from_cents(300));

        assert_eq!(menu.delete_item("Beverage", "Coke"), Ok(2));
        assert_eq!(menu.len(), 2);
        assert!(menu.find("Coke").is_none());

        // Other category members are untouched.
        menu.add_item("Beverage", "Water", Price::from_cents(100));
        assert_eq!(menu.delete_item("Beverage", "Coke"), Ok(0));
        assert_eq!(menu.items_in("Beverage").len(), 1);

        assert_eq!(
            menu.delete_item("Dessert", "Cake"),
            Err(MenuError::CategoryNotFound("Dessert".to_string()))
        );
    }

    #[test]
    fn test_category_survives_deleting_its_last_item() {
        let mut menu = Menu::new();
        menu.add_item("Beverage", "Coke", Price::from_cents(250));

        assert_eq!(menu.delete_item("Beverage", "Coke"), Ok(1));
        assert_eq!(menu.delete_item("Beverage", "Coke"), Ok(0));
        assert_eq!(menu.categories(), ["Beverage"]);
        assert!(menu.items_in("Beverage").is_empty());
        assert!(menu.is_empty());
    }

    #[test]
    fn test_add_prebuilt_item_keeps_detail_through_update() {
        let mut menu = Menu::new();
        let coke = MenuItem::new("Coke", Price::from_cents(250)).with_detail("Large");
        menu.add("Beverage", coke);

        assert_eq!(menu.get_menu()[0].to_string(), "Coke - $2.50 (Large)");
        assert_eq!(menu.get_menu()[0].category(), Some("Beverage"));

        let update = MenuItemUpdate {
            price: Some(Price::from_cents(300)),
            ..Default::default()
        };
        let updated = menu.update_item("Beverage", "Coke", update).unwrap();
        assert_eq!(updated.to_string(), "Coke - $3.00 (Large)");
    }

    #[test]
    fn test_find_or_err() {
        let menu = sample_menu();
        assert_eq!(menu.find_or_err("Coke").unwrap().price(), Price::from_cents(250));
        assert_eq!(
            menu.find_or_err("Pepsi"),
            Err(MenuError::NotOnMenu("Pepsi".to_string()))
        );
    }
}
