//! Menu Item Model (菜品)

use serde::{Deserialize, Serialize};

/// Menu item entity, keyed by its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Free-form label; the UI offers Food / Drinks / Desserts
    pub category: String,
    /// Price in currency unit
    pub price: f64,
    pub available: bool,
}

/// Create-or-replace menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpsert {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

/// Update menu item payload (category is kept)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub price: f64,
    pub available: bool,
}

fn default_true() -> bool {
    true
}
