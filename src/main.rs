//! Demo: fill a menu, queue two orders, and process them in arrival order.

use restaurant_orders::menu::Menu;
use restaurant_orders::model::{MenuItem, Order, Price};
use restaurant_orders::order_manager::OrderManager;
use restaurant_orders::runtime::setup_tracing;
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let mut menu = Menu::new();
    menu.add(
        "Beverage",
        MenuItem::new("Coke", Price::from_dollars(2.5)?).with_detail("Large"),
    );
    menu.add(
        "Appetizer",
        MenuItem::new("Spring Rolls", Price::from_dollars(5.0)?).with_detail("6 pieces"),
    );
    menu.add_item("Maincourse", "Spaghetti", Price::from_dollars(12.0)?);

    println!("Actual menu: {}", serde_json::to_string(&menu)?);

    let coke = menu.find_or_err("Coke")?.clone();
    let spring_rolls = menu.find_or_err("Spring Rolls")?.clone();
    let spaghetti = menu.find_or_err("Spaghetti")?.clone();

    let mut order1 = Order::new();
    order1.add_menu_item(coke.clone(), 2)?;
    order1.add_menu_item(spring_rolls.clone(), 1)?;
    order1.add_menu_item(spaghetti, 1)?;

    let mut order2 = Order::new();
    order2.add_menu_item(coke, 1)?;
    order2.add_menu_item(spring_rolls, 2)?;

    let mut manager = OrderManager::new();
    manager.add_order(order1);
    manager.add_order(order2);

    while !manager.is_empty() {
        if let Some(order) = manager.process_order() {
            let id = order.id().map(|id| id.to_string()).unwrap_or_default();
            println!("\nProcessed order {}:", id);
            println!("{}", order);
            println!("Total to pay: {}", order.calculate_total_price());
        }
    }

    info!(processed = manager.total_processed(), "All orders processed");
    Ok(())
}
