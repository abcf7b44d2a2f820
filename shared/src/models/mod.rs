//! Data models
//!
//! Shared between pos-server and its presentation layer (via API).
//! Entities are keyed by natural identifiers: menu item name, table id, order id.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod report;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use report::*;
