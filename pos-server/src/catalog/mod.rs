//! 菜单与桌台管理
//!
//! Create, update, toggle and delete operations on the menu and table
//! collections. Every mutation runs inside [`PosStore::transact`] so a failed
//! write leaves memory and files as they were.
//!
//! [`PosStore::transact`]: crate::store::PosStore::transact

pub mod menu;
pub mod tables;

pub use menu::{delete_menu_item, list_menu, update_menu_item, upsert_menu_item};
pub use tables::{delete_table, list_tables, toggle_table, upsert_table};
