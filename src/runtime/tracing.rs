//! # Observability & Tracing
//!
//! Structured logging with the `tracing` crate. Queue operations on
//! [`OrderManager`](crate::order_manager::OrderManager) open spans, and state
//! changes are logged with structured fields (`order_id`, `pending`).
//!
//! ## Usage Examples
//!
//! ```bash
//! # Queue activity
//! RUST_LOG=info cargo run
//!
//! # Full payloads (orders, menu updates)
//! RUST_LOG=debug cargo run
//!
//! # Only the queue
//! RUST_LOG=restaurant_orders::order_manager=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo logs:
//!
//! ```text
//! INFO Menu item added name="Coke" category=Some("Beverage") price=$2.50
//! INFO add_order{lines=3}: Order queued order_id=order_1 pending=1
//! INFO add_order{lines=2}: Order queued order_id=order_2 pending=2
//! INFO process_order: Order processed order_id=order_1 pending=1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`. With `RUST_LOG` unset only errors are logged.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
