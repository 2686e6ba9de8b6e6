//! # Restaurant Orders
//!
//! > **A menu, an order builder, and a first-in-first-out order queue.**
//!
//! A caller fills a [`Menu`](menu::Menu), builds [`Order`](model::Order)s from its items,
//! submits them to an [`OrderManager`](order_manager::OrderManager) as they arrive, and
//! then processes them one at a time, computing each bill.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Strict FIFO
//! The manager is a `VecDeque`: `add_order` pushes at the back, `process_order`
//! pops from the front. The number of pending orders is always
//! `submitted - processed`, and orders come out in exactly the order they went in.
//!
//! ### 2. Empty is not an error
//! `process_order` returns `Option<Order>`. An empty queue yields `None` and leaves
//! the queue untouched, so `while let Some(order) = manager.process_order()` is the
//! natural processing loop.
//!
//! ### 3. Exact money
//! [`Price`](model::Price) stores whole cents. Totals are integer sums, and
//! negative or non-finite amounts are rejected when a price is built.
//!
//! ### 4. Type-Safe Error Handling
//! Each module defines its own error type ([`MenuError`](menu::MenuError),
//! [`OrderError`](order::OrderError), [`PriceError`](model::PriceError)).
//!
//! ### 5. Observability
//! `tracing` everywhere; see [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: plain data (`Price`, `MenuItem`, `OrderLine`, `Order`, `OrderId`).
//! - [`menu`]: the catalog and its editing operations.
//! - [`order`]: adding lines to an order and computing its total.
//! - [`order_manager`]: the pending-order queue.
//! - [`runtime`]: logging setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod menu;
pub mod model;
pub mod order;
pub mod order_manager;
pub mod runtime;
